mod dissolve;
mod error;
pub mod fetch;
mod field;
mod logo;
mod pixel;
mod star;
pub mod trail;

use std::sync::mpsc::TryRecvError;

use rand::Rng;
use starcore::{Animation, Raster, Surface};

pub use dissolve::{Layout, LogoDissolve};
pub use error::{LogoError, Result};
pub use fetch::LogoReceiver;
pub use field::StarField;
pub use logo::LogoImage;
pub use pixel::{natural_order, FallingPixel};
pub use star::ShootingStar;

// The back-buffer is trimmed to a multiple of this in both axes.
const BUFFER_STEP: u32 = 10;

/// Runs the star field with the logo dissolve layered on top.
pub struct Driver<R> {
    rng: R,
    stars: StarField,
    logo: LogoDissolve,
    incoming: Option<LogoReceiver>,
    back: Raster,
    frame: (u32, u32),
}

impl<R: Rng> Driver<R> {
    pub fn new(rng: R) -> Driver<R> {
        Driver {
            rng,
            stars: StarField::new(),
            logo: LogoDissolve::new(),
            incoming: None,
            back: Raster::new(0, 0),
            frame: (0, 0),
        }
    }

    /// Installs the logo as soon as `rx` delivers it. Until then, and forever
    /// if loading fails, only stars are drawn.
    pub fn with_logo_source(mut self, rx: LogoReceiver) -> Driver<R> {
        self.incoming = Some(rx);
        self
    }

    pub fn install_logo(&mut self, logo: &LogoImage) {
        self.logo.install(logo, &mut self.rng);
    }

    pub fn stars(&self) -> &StarField {
        &self.stars
    }

    pub fn logo(&self) -> &LogoDissolve {
        &self.logo
    }

    /// Off-screen frame as of the last `draw`.
    pub fn back_buffer(&self) -> &Raster {
        &self.back
    }

    /// One fixed-rate tick: advance both effects for the surface's current
    /// size, then render into it.
    pub fn tick<S: Surface>(&mut self, surface: &mut S) {
        let (w, h) = surface.size();
        self.step(w, h);
        self.draw(surface);
    }

    fn poll_logo(&mut self) {
        let result = match self.incoming.as_ref().map(|rx| rx.try_recv()) {
            None | Some(Err(TryRecvError::Empty)) => return,
            Some(Err(TryRecvError::Disconnected)) => {
                log::warn!("logo loader exited without a result");
                None
            }
            Some(Ok(result)) => Some(result),
        };
        self.incoming = None;

        match result {
            Some(Ok(logo)) => {
                log::info!("logo ready: {}x{}", logo.width(), logo.height());
                self.install_logo(&logo);
            }
            Some(Err(e)) => log::error!("logo disabled: {}", e),
            None => {}
        }
    }
}

impl<R: Rng> Animation for Driver<R> {
    fn step(&mut self, width: u32, height: u32) {
        self.poll_logo();

        self.frame = (width / BUFFER_STEP * BUFFER_STEP, height / BUFFER_STEP * BUFFER_STEP);
        let (fw, fh) = self.frame;

        self.stars.advance(&mut self.rng, fw, fh);
        self.logo.advance(&mut self.rng, fw, fh);
    }

    fn draw<S: Surface>(&mut self, surface: &mut S) {
        let (fw, fh) = self.frame;
        if self.back.size() == self.frame {
            self.back.clear_rect(0.0, 0.0, fw as f64, fh as f64);
        } else {
            self.back.resize(fw, fh);
        }

        self.stars.draw(&mut self.back);
        self.logo.draw(&mut self.back);

        let (w, h) = surface.size();
        surface.clear_rect(0.0, 0.0, w as f64, h as f64);
        surface.draw_image(
            &self.back,
            (w as f64 - fw as f64) / 2.0,
            (h as f64 - fh as f64) / 2.0,
            fw as f64,
            fh as f64,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;
    use starcore::Color;
    use std::sync::mpsc;

    fn driver() -> Driver<Pcg64Mcg> {
        Driver::new(Pcg64Mcg::seed_from_u64(2024))
    }

    #[test]
    fn back_buffer_is_trimmed_to_multiple_of_ten() {
        let mut d = driver();
        let mut screen = Raster::new(107, 59);
        d.tick(&mut screen);
        assert_eq!(d.back_buffer().size(), (100, 50));

        let mut resized = Raster::new(40, 40);
        d.tick(&mut resized);
        assert_eq!(d.back_buffer().size(), (40, 40));
    }

    #[test]
    fn back_buffer_is_centred_on_surface() {
        let mut d = driver();
        let mut screen = Raster::new(24, 24);
        screen.fill_rect(0.0, 0.0, 24.0, 24.0, Color::WHITE);
        for _ in 0..200 {
            d.tick(&mut screen);
        }

        // 24 -> 20, a 2 pixel border that is only ever cleared
        for i in 0..24 {
            for &(x, y) in &[(i, 0), (i, 1), (0, i), (1, i), (i, 22), (i, 23), (22, i), (23, i)] {
                assert_eq!(screen.pixel(x, y).unwrap().packed(), 0, "({}, {})", x, y);
            }
        }
    }

    #[test]
    fn draw_uses_the_surface_size_it_is_given() {
        let mut d = driver();
        d.step(30, 30);

        // the window grew between the update and the render
        let mut screen = Raster::new(50, 50);
        screen.fill_rect(0.0, 0.0, 50.0, 50.0, Color::WHITE);
        d.draw(&mut screen);

        for &(x, y) in &[(0, 0), (9, 9), (45, 45), (49, 0), (0, 49), (49, 49)] {
            assert_eq!(screen.pixel(x, y).unwrap().packed(), 0, "({}, {})", x, y);
        }
        assert!(screen.pixels().all(|(_, _, c)| c != Color::WHITE));
    }

    #[test]
    fn one_star_spawns_per_tick() {
        let mut d = driver();
        let mut screen = Raster::new(1000, 1000);
        for _ in 0..3 {
            d.tick(&mut screen);
        }
        assert_eq!(d.stars().stars().len(), 3);
    }

    #[test]
    fn redraw_without_step_is_identical() {
        let mut d = driver();
        d.install_logo(&LogoImage::new(2, 2, vec![Color::PINK; 4]).unwrap());
        let mut screen = Raster::new(60, 60);
        for _ in 0..40 {
            d.tick(&mut screen);
        }

        let mut again = Raster::new(60, 60);
        d.draw(&mut again);
        assert_eq!(screen, again);
    }

    #[test]
    fn logo_arrives_through_channel() {
        let (tx, rx) = mpsc::channel();
        let mut d = driver().with_logo_source(rx);
        let mut screen = Raster::new(50, 50);

        d.tick(&mut screen);
        assert!(!d.logo().is_active());

        tx.send(LogoImage::new(1, 1, vec![Color::GREEN])).unwrap();
        d.tick(&mut screen);
        assert!(d.logo().is_active());
        assert_eq!(d.logo().falling().len(), 1);
    }

    #[test]
    fn failed_logo_leaves_stars_running() {
        let (tx, rx) = mpsc::channel();
        let mut d = driver().with_logo_source(rx);
        tx.send(LogoImage::parse("garbage")).unwrap();

        let mut screen = Raster::new(50, 50);
        for _ in 0..5 {
            d.tick(&mut screen);
        }
        assert!(!d.logo().is_active());
        assert!(!d.stars().stars().is_empty());
    }

    #[test]
    fn dropped_loader_is_forgotten() {
        let (tx, rx) = mpsc::channel::<Result<LogoImage>>();
        drop(tx);
        let mut d = driver().with_logo_source(rx);
        d.step(30, 30);
        assert!(d.incoming.is_none());
    }
}
