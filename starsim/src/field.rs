use rand::Rng;
use starcore::{Color, Surface};

use crate::star::ShootingStar;
use crate::trail;

#[derive(Debug, Default)]
pub struct StarField {
    stars: Vec<ShootingStar>,
}

impl StarField {
    pub fn new() -> StarField {
        Default::default()
    }

    pub fn stars(&self) -> &[ShootingStar] {
        &self.stars
    }

    pub fn spawn(&mut self, star: ShootingStar) {
        self.stars.push(star);
    }

    /// Spawns one random star, moves every star one frame along its
    /// diagonal and drops the ones that have left a `width` x `height` canvas.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R, width: u32, height: u32) {
        let color = Color::hsb(rng.random(), rng.random(), rng.random());
        self.spawn(ShootingStar::new(color));

        let w = width as i32;
        let h = height as i32;
        let ratio = (h + w) as f32 / (255.0 * 3.0);

        let before = self.stars.len();
        self.stars.retain_mut(|star| {
            let (spawn_x, spawn_y) = spawn_point(star.entropy(), ratio, h);
            let travelled = star.lifetime * star.speed();
            let cur_x = spawn_x + travelled;
            let cur_y = spawn_y + travelled;

            if cur_x > w + star.size() && cur_y > h + star.size() {
                return false;
            }

            star.position = Some((cur_x, cur_y));
            star.lifetime += 1;
            true
        });

        let culled = before - self.stars.len();
        if culled > 0 {
            log::trace!("culled {} stars, {} alive", culled, self.stars.len());
        }
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        for star in &self.stars {
            if let Some(pos) = star.position() {
                trail::render(surface, pos, star.color(), star.speed(), star.size());
            }
        }
    }
}

// Stars enter along the left and top edges; brighter colors start further
// along that edge.
fn spawn_point(entropy: i32, ratio: f32, h: i32) -> (i32, i32) {
    let offset = (entropy as f32 * ratio).round() as i32;
    if offset < h {
        (0, h - offset)
    } else {
        (offset - h, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;
    use starcore::Raster;

    fn rng() -> Pcg64Mcg {
        Pcg64Mcg::seed_from_u64(42)
    }

    #[test]
    fn advance_spawns_exactly_one_star_per_tick() {
        let mut rng = rng();
        let mut field = StarField::new();
        for tick in 1..=5 {
            field.advance(&mut rng, 1000, 1000);
            assert_eq!(field.stars().len(), tick);
        }
    }

    #[test]
    fn spawn_point_walks_up_left_edge_then_along_top() {
        let ratio = (300 + 200) as f32 / 765.0;
        assert_eq!(spawn_point(0, ratio, 200), (0, 200));
        assert_eq!(spawn_point(153, ratio, 200), (0, 100));
        assert_eq!(spawn_point(306, ratio, 200), (0, 0));
        assert_eq!(spawn_point(765, ratio, 200), (300, 0));
    }

    #[test]
    fn star_moves_speed_pixels_per_tick_on_both_axes() {
        let mut rng = rng();
        let mut field = StarField::new();
        field.spawn(ShootingStar::new(Color::opaque(255, 0, 0)));
        let speed = field.stars()[0].speed();

        field.advance(&mut rng, 1000, 1000);
        let (x0, y0) = field.stars()[0].position().unwrap();
        for n in 1..10 {
            field.advance(&mut rng, 1000, 1000);
            let (x, y) = field.stars()[0].position().unwrap();
            assert_eq!((x - x0, y - y0), (n * speed, n * speed));
            assert_eq!(field.stars()[0].lifetime(), n + 1);
        }
    }

    #[test]
    fn star_is_culled_once_past_both_edges() {
        let mut field = StarField::new();
        // entropy 0 spawns at (0, h), so x is the last axis to leave
        field.spawn(ShootingStar::new(Color::BLACK));
        let mut rng = rng();
        let (w, h) = (20u32, 10u32);

        let mut drawn = Vec::new();
        for tick in 1..=40 {
            field.advance(&mut rng, w, h);
            let first = &field.stars()[0];
            if first.color() != Color::BLACK || first.lifetime() != tick {
                break;
            }
            drawn.push(first.position().unwrap());
        }

        // speed 1, size 1: frames 0..=21, the last one sits exactly on w + size
        assert_eq!(drawn.len(), 22);
        assert_eq!(drawn.last(), Some(&(21, 31)));
    }

    #[test]
    fn culled_star_is_not_drawn() {
        let mut field = StarField::new();
        let mut star = ShootingStar::new(Color::BLACK);
        star.lifetime = 100;
        field.spawn(star);

        field.advance(&mut Pcg64Mcg::seed_from_u64(3), 10, 10);
        assert_eq!(field.stars().len(), 1);
        assert_eq!(field.stars()[0].lifetime(), 1);
    }

    #[test]
    fn draw_is_repeatable() {
        let mut rng = rng();
        let mut field = StarField::new();
        for _ in 0..30 {
            field.advance(&mut rng, 64, 48);
        }

        let mut first = Raster::new(64, 48);
        let mut second = Raster::new(64, 48);
        field.draw(&mut first);
        field.draw(&mut second);
        assert_eq!(first, second);
        assert!(first.pixels().any(|(_, _, c)| c.packed() != 0));
    }
}
