use std::collections::{BTreeMap, VecDeque};

use rand::seq::SliceRandom;
use rand::Rng;
use starcore::{Color, Raster, Surface};

use crate::logo::LogoImage;
use crate::pixel::{natural_order, FallingPixel};
use crate::trail;

// Rows per reveal band.
const BAND_HEIGHT: f64 = 1.7;

/// Where the logo sits on a canvas: an integer scale factor and the top-left
/// corner of the scaled image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub scale: f64,
    pub base_x: f64,
    pub base_y: f64,
}

impl Layout {
    /// Scales the logo up to fill half of the smaller canvas dimension and
    /// centres it.
    pub fn fit(canvas_w: u32, canvas_h: u32, logo_w: u32, logo_h: u32) -> Layout {
        let (cw, ch) = (canvas_w as f64, canvas_h as f64);
        let (lw, lh) = (logo_w as f64, logo_h as f64);
        let scale = (ch * 0.5 / lh).min(cw * 0.5 / lw).ceil();
        Layout {
            scale,
            base_x: (cw - lw * scale) / 2.0,
            base_y: (ch - lh * scale) / 2.0,
        }
    }
}

/// Scatters the logo into falling pixels that land one batch at a time.
#[derive(Debug, Default)]
pub struct LogoDissolve {
    pending: VecDeque<FallingPixel>,
    falling: Vec<FallingPixel>,
    settled: Option<Raster>,
    layout: Option<Layout>,
}

impl LogoDissolve {
    pub fn new() -> LogoDissolve {
        Default::default()
    }

    /// Queues every non-black pixel of `logo`, roughly bottom rows first.
    pub fn install<R: Rng + ?Sized>(&mut self, logo: &LogoImage, rng: &mut R) {
        let w = logo.width();
        let pixels: Vec<FallingPixel> = logo
            .pixels()
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c != Color::BLACK)
            .map(|(i, &c)| {
                let i = i as u32;
                FallingPixel::new((i % w) as i32, (i / w) as i32, c, rng)
            })
            .collect();

        log::debug!(
            "installing {}x{} logo, {} visible pixels",
            w,
            logo.height(),
            pixels.len()
        );

        let fits = self
            .settled
            .as_ref()
            .map_or(false, |s| s.size() == (w, logo.height()));
        if !fits {
            self.settled = Some(Raster::new(w, logo.height()));
        }
        self.pending.extend(reveal_order(pixels, rng));
    }

    pub fn is_active(&self) -> bool {
        self.settled.is_some()
    }

    /// True once every queued pixel has landed.
    pub fn is_assembled(&self) -> bool {
        self.pending.is_empty() && self.falling.is_empty()
    }

    pub fn pending(&self) -> impl Iterator<Item = &FallingPixel> {
        self.pending.iter()
    }

    pub fn falling(&self) -> &[FallingPixel] {
        &self.falling
    }

    pub fn settled(&self) -> Option<&Raster> {
        self.settled.as_ref()
    }

    pub fn layout(&self) -> Option<Layout> {
        self.layout
    }

    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R, width: u32, height: u32) {
        if !self.pending.is_empty() {
            let n = rng.random_range(10..15).min(self.pending.len());
            self.falling.extend(self.pending.drain(..n));
        }

        let Some(settled) = self.settled.as_mut() else {
            return;
        };

        let (landed, still_falling): (Vec<_>, Vec<_>) =
            self.falling.drain(..).partition(FallingPixel::has_landed);
        for p in &landed {
            settled.fill_rect(p.x() as f64, p.y() as f64, 1.0, 1.0, p.color());
        }
        self.falling = still_falling;

        let layout = Layout::fit(width, height, settled.width(), settled.height());
        for p in &mut self.falling {
            let travelled = (p.lifetime * p.speed()) as f64;
            let goal_x = layout.base_x + p.x() as f64 * layout.scale;
            let goal_y = layout.base_y + p.y() as f64 * layout.scale;
            p.position = Some((
                (goal_x + travelled).round() as i32,
                (goal_y + travelled).round() as i32,
            ));
            p.lifetime += 1;
        }
        self.layout = Some(layout);

        if !landed.is_empty() && self.is_assembled() {
            log::info!("logo assembled");
        }
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        let (Some(settled), Some(layout)) = (self.settled.as_ref(), self.layout) else {
            return;
        };

        surface.set_image_smoothing(false);
        surface.draw_image(
            settled,
            layout.base_x,
            layout.base_y,
            settled.width() as f64 * layout.scale,
            settled.height() as f64 * layout.scale,
        );

        let size = layout.scale as i32;
        for p in &self.falling {
            if let Some(pos) = p.position() {
                trail::render(surface, pos, p.color(), p.speed(), size);
            }
        }
    }
}

fn band(p: &FallingPixel) -> i64 {
    (p.y() as f64 / BAND_HEIGHT).floor() as i64
}

// Shuffles inside each band and reverses the whole sequence, so the logo
// fills in from the bottom with a ragged edge.
fn reveal_order<R: Rng + ?Sized>(pixels: Vec<FallingPixel>, rng: &mut R) -> Vec<FallingPixel> {
    let mut bands: BTreeMap<i64, Vec<FallingPixel>> = BTreeMap::new();
    for p in pixels {
        bands.entry(band(&p)).or_default().push(p);
    }

    let mut order = Vec::new();
    for (_, mut group) in bands {
        group.sort_by(natural_order);
        group.shuffle(rng);
        order.extend(group);
    }
    order.reverse();
    order
}
