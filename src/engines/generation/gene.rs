use crate::engines::generation::random::RandomSource;
use crate::types::{Color, Position, ShapeType};
use serde::{Deserialize, Serialize};

/// One drawable primitive. `size` is the radius for circles and the side
/// length for squares; it never drops below 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Gene {
    pub position: Position,
    pub color: Color,
    pub shape: ShapeType,
    pub size: i32,
}

/// The three in-place mutation kinds a gene supports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneMutation {
    Position,
    Color,
    Length,
}

impl GeneMutation {
    pub const ALL: [GeneMutation; 3] = [GeneMutation::Position, GeneMutation::Color, GeneMutation::Length];
}

impl Gene {
    pub fn new(x: i32, y: i32, color: Color, shape: ShapeType, size: i32) -> Self {
        Self {
            position: Position { x, y },
            color,
            shape,
            size: size.max(1),
        }
    }

    /// Move by up to 10% of each image dimension, wrapping toroidally into the canvas.
    pub fn mutate_position(&mut self, rng: &mut impl RandomSource, img_width: i32, img_height: i32) {
        let dx = rng.uniform_int(-(img_width / 10).max(0), (img_width / 10).max(0));
        let dy = rng.uniform_int(-(img_height / 10).max(0), (img_height / 10).max(0));

        self.position.x = wrap(self.position.x, dx, img_width);
        self.position.y = wrap(self.position.y, dy, img_height);
    }

    /// Shift every channel by [-10, 10], wrapping modulo 256 rather than clamping.
    pub fn mutate_color(&mut self, rng: &mut impl RandomSource) {
        for channel in [
            &mut self.color.r,
            &mut self.color.g,
            &mut self.color.b,
            &mut self.color.a,
        ] {
            let offset = rng.uniform_int(-10, 10);
            *channel = (*channel as i32 + offset).rem_euclid(256) as u8;
        }
    }

    /// Grow or shrink by up to 20% of the current size, floored at 1.
    pub fn mutate_length(&mut self, rng: &mut impl RandomSource) {
        let delta = (self.size as f64 * 0.2) as i32;
        self.size = self.size.saturating_add(rng.uniform_int(-delta, delta)).max(1);
    }

    pub fn apply(&mut self, mutation: GeneMutation, rng: &mut impl RandomSource, img_width: i32, img_height: i32) {
        match mutation {
            GeneMutation::Position => self.mutate_position(rng, img_width, img_height),
            GeneMutation::Color => self.mutate_color(rng),
            GeneMutation::Length => self.mutate_length(rng),
        }
    }
}

/// `value + offset` reduced into `[0, limit)`, computed in i64 so extreme positions cannot overflow.
fn wrap(value: i32, offset: i32, limit: i32) -> i32 {
    if limit <= 0 {
        return 0;
    }
    (i64::from(value) + i64::from(offset)).rem_euclid(i64::from(limit)) as i32
}
