use starcore::Color;

#[derive(Clone, Debug)]
pub struct ShootingStar {
    color: Color,
    entropy: i32,
    size: i32,
    speed: i32,
    pub(crate) lifetime: i32,
    pub(crate) position: Option<(i32, i32)>,
}

impl ShootingStar {
    pub fn new(color: Color) -> ShootingStar {
        let (r, g, b) = (color.red() as i32, color.green() as i32, color.blue() as i32);
        ShootingStar {
            color,
            entropy: r + g + b,
            size: (b + g) / 128 + 1,
            speed: (r * 4 + g * 2 + b) / 256 + 1,
            lifetime: 0,
            position: None,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    // Sum of the three channels, 0..=765
    pub fn entropy(&self) -> i32 {
        self.entropy
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn speed(&self) -> i32 {
        self.speed
    }

    pub fn lifetime(&self) -> i32 {
        self.lifetime
    }

    /// Where the star is drawn this frame, once it has been advanced.
    pub fn position(&self) -> Option<(i32, i32)> {
        self.position
    }
}
