use std::str::FromStr;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use starcore::Color;

use crate::error::{LogoError, Result};

/// A decoded logo bitmap, row-major, one opaque color per pixel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogoImage {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl LogoImage {
    pub fn new(width: u32, height: u32, pixels: Vec<Color>) -> Result<LogoImage> {
        if width == 0 || height == 0 {
            return Err(LogoError::ZeroSize { width, height });
        }
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(LogoError::PixelCount {
                expected,
                found: pixels.len(),
            });
        }
        Ok(LogoImage {
            width,
            height,
            pixels,
        })
    }

    /// Parses a `"<width>,<height>,<base64 rgb bytes>"` payload.
    pub fn parse(text: &str) -> Result<LogoImage> {
        let fields: Vec<&str> = text.trim().split(',').collect();
        let (width, height, data) = match fields.as_slice() {
            &[w, h, d] => (w, h, d),
            _ => return Err(LogoError::FieldCount(fields.len())),
        };

        let width = parse_dimension(width)?;
        let height = parse_dimension(height)?;
        let bytes = BASE64.decode(data.trim())?;

        let expected = width as usize * height as usize * 3;
        if bytes.len() != expected {
            return Err(LogoError::ByteCount {
                expected,
                found: bytes.len(),
            });
        }

        let pixels = bytes
            .chunks(3)
            .map(|rgb| Color::opaque(rgb[0], rgb[1], rgb[2]))
            .collect();
        LogoImage::new(width, height, pixels)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }
}

impl FromStr for LogoImage {
    type Err = LogoError;

    fn from_str(s: &str) -> Result<LogoImage> {
        LogoImage::parse(s)
    }
}

fn parse_dimension(field: &str) -> Result<u32> {
    let field = field.trim();
    field
        .parse()
        .map_err(|_| LogoError::InvalidNumber(field.to_owned()))
}
