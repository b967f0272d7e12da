use std::iter;

use starcore::{Color, Surface};

/// Draws a particle as `size * 2` squares, each darker and smaller than the
/// last, stepping back up-left by `speed` pixels per square.
pub fn render<S: Surface + ?Sized>(
    surface: &mut S,
    (x, y): (i32, i32),
    color: Color,
    speed: i32,
    size: i32,
) {
    let shades = iter::successors(Some(color), |c| Some(c.darker()));
    for (i, shade) in shades.take((size * 2).max(0) as usize).enumerate() {
        let i = i as i32;
        let side = (size - i / 2).max(0) as f64;
        surface.fill_rect(
            (x - i * speed) as f64,
            (y - i * speed) as f64,
            side,
            side,
            shade,
        );
    }
}
