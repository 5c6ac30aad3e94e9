use itertools::iproduct;

use crate::gridsnake::types::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    pub width:  i64,
    pub height: i64,
}

impl Board {
    #[must_use]
    pub const fn contains(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && point.x < self.width
            && point.y < self.height
    }

    /// Maps any point back onto the torus: leaving one edge re-enters from
    /// the opposite edge.
    #[must_use]
    pub fn wrap(&self, point: Point) -> Point {
        Point {
            x: point.x.rem_euclid(self.width),
            y: point.y.rem_euclid(self.height),
        }
    }

    /// All cells in row-major order, (0, 0) first.
    pub fn cells(&self) -> impl Iterator<Item = Point> {
        iproduct!(0..self.height, 0..self.width).map(|(y, x)| Point { x, y })
    }
}
