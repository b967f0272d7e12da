use std::fmt;
use std::str::FromStr;

use thiserror::Error;

const FACTOR: f64 = 0.7;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    Alpha,
    Red,
    Green,
    Blue,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            Channel::Alpha => "Alpha",
            Channel::Red => "Red",
            Channel::Green => "Green",
            Channel::Blue => "Blue",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("color parameter outside of expected range:{}", channel_list(.channels))]
    OutOfRange { channels: Vec<Channel> },
    #[error("invalid hex color {0:?}")]
    InvalidHex(String),
}

fn channel_list(channels: &[Channel]) -> String {
    channels.iter().map(|c| format!(" {}", c)).collect()
}

/// An sRGB color with alpha, packed as `0xAARRGGBB`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    packed: u32,
}

impl Color {
    pub const WHITE: Color = Color::opaque(255, 255, 255);
    pub const LIGHT_GRAY: Color = Color::opaque(192, 192, 192);
    pub const GRAY: Color = Color::opaque(128, 128, 128);
    pub const DARK_GRAY: Color = Color::opaque(64, 64, 64);
    pub const BLACK: Color = Color::opaque(0, 0, 0);
    pub const RED: Color = Color::opaque(255, 0, 0);
    pub const PINK: Color = Color::opaque(255, 175, 175);
    pub const ORANGE: Color = Color::opaque(255, 200, 0);
    pub const YELLOW: Color = Color::opaque(255, 255, 0);
    pub const GREEN: Color = Color::opaque(0, 255, 0);
    pub const MAGENTA: Color = Color::opaque(255, 0, 255);
    pub const CYAN: Color = Color::opaque(0, 255, 255);
    pub const BLUE: Color = Color::opaque(0, 0, 255);

    pub const fn opaque(r: u8, g: u8, b: u8) -> Color {
        Color::from_packed(0xFF00_0000 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    pub const fn from_packed(packed: u32) -> Color {
        Color { packed }
    }

    pub fn rgb(r: i32, g: i32, b: i32) -> Result<Color, ColorError> {
        Color::rgba(r, g, b, 255)
    }

    /// Builds a color from channel values, rejecting anything outside `0..=255`.
    ///
    /// The error names every offending channel, not just the first one.
    pub fn rgba(r: i32, g: i32, b: i32, a: i32) -> Result<Color, ColorError> {
        let channels: Vec<Channel> = [
            (Channel::Alpha, a),
            (Channel::Red, r),
            (Channel::Green, g),
            (Channel::Blue, b),
        ]
        .iter()
        .filter(|&&(_, v)| !(0..=255).contains(&v))
        .map(|&(c, _)| c)
        .collect();

        if !channels.is_empty() {
            return Err(ColorError::OutOfRange { channels });
        }

        Ok(Color::from_packed(
            (a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32,
        ))
    }

    /// Parses a six digit hex triplet such as `"ff8800"` into an opaque color.
    pub fn decode(s: &str) -> Result<Color, ColorError> {
        if s.len() != 6 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidHex(s.to_owned()));
        }
        let rgb = u32::from_str_radix(s, 16).map_err(|_| ColorError::InvalidHex(s.to_owned()))?;
        Ok(Color::from_packed(0xFF00_0000 | rgb))
    }

    /// HSB to RGB conversion, all three inputs in `[0, 1]`.
    ///
    /// Arithmetic is done in `f32` with a half-pixel offset before truncation,
    /// so results match the reference integer conversion bit for bit.
    pub fn hsb(hue: f32, saturation: f32, brightness: f32) -> Color {
        let channel = |v: f32| (v * 255.0 + 0.5) as u8;

        if saturation == 0.0 {
            let v = channel(brightness);
            return Color::opaque(v, v, v);
        }

        let h = (hue - hue.floor()) * 6.0;
        let f = h - h.floor();
        let p = brightness * (1.0 - saturation);
        let q = brightness * (1.0 - saturation * f);
        let t = brightness * (1.0 - saturation * (1.0 - f));

        let (r, g, b) = match h as i32 {
            0 => (brightness, t, p),
            1 => (q, brightness, p),
            2 => (p, brightness, t),
            3 => (p, q, brightness),
            4 => (t, p, brightness),
            5 => (brightness, p, q),
            _ => (0.0, 0.0, 0.0),
        };

        Color::opaque(channel(r), channel(g), channel(b))
    }

    pub fn packed(self) -> u32 {
        self.packed
    }

    pub fn red(self) -> u8 {
        (self.packed >> 16 & 0xFF) as u8
    }

    pub fn green(self) -> u8 {
        (self.packed >> 8 & 0xFF) as u8
    }

    pub fn blue(self) -> u8 {
        (self.packed & 0xFF) as u8
    }

    pub fn alpha(self) -> u8 {
        (self.packed >> 24 & 0xFF) as u8
    }

    pub fn with_channels(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color::from_packed((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    pub fn darker(self) -> Color {
        let scale = |c: u8| ((c as f64 * FACTOR) as i32).max(0) as u8;
        Color::with_channels(
            scale(self.red()),
            scale(self.green()),
            scale(self.blue()),
            self.alpha(),
        )
    }

    pub fn brighter(self) -> Color {
        let floor = (1.0 / (1.0 - FACTOR)) as i32;
        let (r, g, b) = (self.red() as i32, self.green() as i32, self.blue() as i32);

        if r == 0 && g == 0 && b == 0 {
            let v = floor as u8;
            return Color::with_channels(v, v, v, self.alpha());
        }

        let scale = |c: i32| {
            let c = if c > 0 && c < floor { floor } else { c };
            ((c as f64 / FACTOR) as i32).min(255) as u8
        };
        Color::with_channels(scale(r), scale(g), scale(b), self.alpha())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red(), self.green(), self.blue())
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Color, ColorError> {
        Color::decode(s)
    }
}
