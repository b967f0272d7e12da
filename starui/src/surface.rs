use piston_window::{rectangle, Context, Graphics};
use starcore::{Color, Raster, Surface};

pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

pub fn color_arr(color: Color) -> [f32; 4] {
    [
        color.red() as f32 / 255.0,
        color.green() as f32 / 255.0,
        color.blue() as f32 / 255.0,
        color.alpha() as f32 / 255.0,
    ]
}

/// Adapts a piston graphics backend to the `Surface` contract for one frame.
pub struct PistonSurface<'a, G: 'a> {
    context: Context,
    g: &'a mut G,
    size: (u32, u32),
}

impl<'a, G: Graphics> PistonSurface<'a, G> {
    pub fn new(context: Context, g: &'a mut G, size: (u32, u32)) -> PistonSurface<'a, G> {
        PistonSurface { context, g, size }
    }
}

impl<'a, G: Graphics> Surface for PistonSurface<'a, G> {
    fn size(&self) -> (u32, u32) {
        self.size
    }

    // The window has no alpha channel; clearing means painting the background.
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        rectangle(BACKGROUND, [x, y, w, h], self.context.transform, &mut *self.g);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color) {
        if w <= 0.0 || h <= 0.0 {
            return;
        }
        rectangle(color_arr(color), [x, y, w, h], self.context.transform, &mut *self.g);
    }

    // One rectangle per horizontal run of equal, non-transparent pixels.
    fn draw_image(&mut self, image: &Raster, x: f64, y: f64, w: f64, h: f64) {
        let (iw, ih) = (image.width(), image.height());
        if iw == 0 || ih == 0 {
            return;
        }
        let sx = w / iw as f64;
        let sy = h / ih as f64;

        for row in 0..ih {
            let mut col = 0;
            while col < iw {
                let color = match image.pixel(col, row) {
                    Some(c) if c.alpha() != 0 => c,
                    _ => {
                        col += 1;
                        continue;
                    }
                };
                let start = col;
                while col < iw && image.pixel(col, row) == Some(color) {
                    col += 1;
                }
                rectangle(
                    color_arr(color),
                    [
                        x + start as f64 * sx,
                        y + row as f64 * sy,
                        (col - start) as f64 * sx,
                        sy,
                    ],
                    self.context.transform,
                    &mut *self.g,
                );
            }
        }
    }

    // Rectangles are always drawn with hard edges.
    fn set_image_smoothing(&mut self, _enabled: bool) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_arr_normalises_channels() {
        assert_eq!(color_arr(Color::RED), [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(
            color_arr(Color::with_channels(51, 102, 0, 0)),
            [0.2, 0.4, 0.0, 0.0]
        );
    }
}
