use crate::color::Color;
use crate::Surface;

/// An owned block of pixels that can be drawn into like any other surface.
///
/// Cleared pixels are fully transparent (`packed() == 0`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    data: Vec<u32>,
}

impl Raster {
    pub fn new(width: u32, height: u32) -> Raster {
        Raster {
            width,
            height,
            data: vec![0; (width * height) as usize],
        }
    }

    /// Changes the dimensions and clears every pixel, like resizing a canvas.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.data.clear();
        self.data.resize((width * height) as usize, 0);
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x < self.width && y < self.height {
            Some(Color::from_packed(self.data[(y * self.width + x) as usize]))
        } else {
            None
        }
    }

    /// Row-major iterator over `(x, y, color)` for every pixel.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32, Color)> + '_ {
        let w = self.width.max(1);
        self.data
            .iter()
            .enumerate()
            .map(move |(i, &p)| (i as u32 % w, i as u32 / w, Color::from_packed(p)))
    }

    // Rounds a rectangle to whole pixels and clips it against the raster.
    fn clip(&self, x: f64, y: f64, w: f64, h: f64) -> Option<(u32, u32, u32, u32)> {
        let x0 = x.round().max(0.0);
        let y0 = y.round().max(0.0);
        let x1 = (x + w).round().min(self.width as f64);
        let y1 = (y + h).round().min(self.height as f64);
        if x1 <= x0 || y1 <= y0 {
            return None;
        }
        Some((x0 as u32, y0 as u32, x1 as u32, y1 as u32))
    }

    fn blend(&mut self, x: u32, y: u32, src: Color) {
        let idx = (y * self.width + x) as usize;
        match src.alpha() {
            0 => {}
            255 => self.data[idx] = src.packed(),
            a => {
                let dst = Color::from_packed(self.data[idx]);
                let a = a as u16;
                let mix = |s: u8, d: u8| ((s as u16 * a + d as u16 * (255 - a)) / 255) as u8;
                let out_a = a + dst.alpha() as u16 * (255 - a) / 255;
                self.data[idx] = Color::with_channels(
                    mix(src.red(), dst.red()),
                    mix(src.green(), dst.green()),
                    mix(src.blue(), dst.blue()),
                    out_a as u8,
                )
                .packed();
            }
        }
    }
}

impl Surface for Raster {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        if let Some((x0, y0, x1, y1)) = self.clip(x, y, w, h) {
            for py in y0..y1 {
                let row = (py * self.width) as usize;
                for p in &mut self.data[row + x0 as usize..row + x1 as usize] {
                    *p = 0;
                }
            }
        }
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color) {
        if let Some((x0, y0, x1, y1)) = self.clip(x, y, w, h) {
            for py in y0..y1 {
                for px in x0..x1 {
                    self.blend(px, py, color);
                }
            }
        }
    }

    // Nearest-neighbour sampling.
    fn draw_image(&mut self, image: &Raster, x: f64, y: f64, w: f64, h: f64) {
        if image.width == 0 || image.height == 0 {
            return;
        }
        let (x0, y0, x1, y1) = match self.clip(x, y, w, h) {
            Some(r) => r,
            None => return,
        };
        let left = x.round();
        let top = y.round();
        let dw = w.round();
        let dh = h.round();

        for py in y0..y1 {
            let src_y = ((py as f64 - top) * image.height as f64 / dh) as u32;
            let src_y = src_y.min(image.height - 1);
            for px in x0..x1 {
                let src_x = ((px as f64 - left) * image.width as f64 / dw) as u32;
                let src_x = src_x.min(image.width - 1);
                let src = Color::from_packed(image.data[(src_y * image.width + src_x) as usize]);
                self.blend(px, py, src);
            }
        }
    }

    fn set_image_smoothing(&mut self, _enabled: bool) {}
}
