//! Shape catalog - random selection of shapes and colors

use elevatris_types::{BlockColor, Orientation, ShapeKind, NUM_COLUMNS};

use crate::{Shape, SimpleRng};

/// Hands out shapes for ordinary spawns and full lines for elevation.
///
/// Ordinary spawns pick uniformly among the standard variants, with a random
/// orientation and a single random color. Full lines never come out of
/// [`ShapeCatalog::random_shape`].
#[derive(Debug, Clone)]
pub struct ShapeCatalog {
    rng: SimpleRng,
}

impl ShapeCatalog {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    pub fn random_color(&mut self) -> BlockColor {
        self.rng.pick(&BlockColor::ALL)
    }

    /// A random standard shape with its pivot at (column, row)
    pub fn random_shape(&mut self, column: i8, row: i8) -> Shape {
        let kind = self.rng.pick(&ShapeKind::STANDARD);
        let orientation = self.rng.pick(&Orientation::ALL);
        let color = self.random_color();
        Shape::new(kind, column, row, orientation, color)
    }

    /// A full-width line on `row`, every block independently colored
    pub fn full_line(&mut self, row: i8) -> Shape {
        let mut colors = [BlockColor::Blue; NUM_COLUMNS as usize];
        for color in colors.iter_mut() {
            *color = self.random_color();
        }
        Shape::full_line(0, row, colors)
    }

    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}

impl Default for ShapeCatalog {
    fn default() -> Self {
        Self::new(1)
    }
}
