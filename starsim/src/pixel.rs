use std::cmp::Ordering;

use rand::Rng;
use starcore::Color;

/// One logo pixel on its way to the settled image.
#[derive(Clone, Debug)]
pub struct FallingPixel {
    x: i32,
    y: i32,
    color: Color,
    speed: i32,
    pub(crate) lifetime: i32,
    pub(crate) position: Option<(i32, i32)>,
}

impl FallingPixel {
    pub fn new<R: Rng + ?Sized>(x: i32, y: i32, color: Color, rng: &mut R) -> FallingPixel {
        FallingPixel {
            x,
            y,
            color,
            speed: rng.random_range(5..10),
            lifetime: rng.random_range(-60..-40),
            position: None,
        }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn speed(&self) -> i32 {
        self.speed
    }

    // Negative while the pixel is still on its way
    pub fn lifetime(&self) -> i32 {
        self.lifetime
    }

    pub fn position(&self) -> Option<(i32, i32)> {
        self.position
    }

    pub fn has_landed(&self) -> bool {
        self.lifetime >= 0
    }
}

/// Grid order: top row first, left to right within a row.
pub fn natural_order(a: &FallingPixel, b: &FallingPixel) -> Ordering {
    a.y.cmp(&b.y).then(a.x.cmp(&b.x))
}
