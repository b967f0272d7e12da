mod color;
mod raster;

pub use color::{Channel, Color, ColorError};
pub use raster::Raster;

/// An immediate-mode 2D drawing target.
///
/// Coordinates are in pixels with the origin at the top-left corner. The size
/// may change between frames, so callers re-read it every tick.
pub trait Surface {
    fn size(&self) -> (u32, u32);
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color);
    /// Draws `image` stretched to cover the `w` x `h` rectangle at `(x, y)`.
    fn draw_image(&mut self, image: &Raster, x: f64, y: f64, w: f64, h: f64);
    /// Hint for later `draw_image` calls. Surfaces that only sample
    /// nearest-neighbour may ignore it.
    fn set_image_smoothing(&mut self, enabled: bool);
}

pub trait Animation {
    /// Advances one logic frame for a host surface of `width` x `height`.
    fn step(&mut self, width: u32, height: u32);
    /// Renders the current frame. Drawing twice without a `step` in between
    /// yields the same image.
    fn draw<S: Surface>(&mut self, surface: &mut S);
}
