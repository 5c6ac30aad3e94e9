use crate::gridsnake::{
    constants::{INITIAL_SNAKE_LENGTH, MAX_SNAKE_LENGTH},
    types::Point,
};

/// Fixed-capacity segment buffer. Index 0 is the head, `len - 1` the tail;
/// slots past `len` are dead storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnakeBody {
    segments: [Point; MAX_SNAKE_LENGTH],
    len:      usize,
}

impl SnakeBody {
    /// A fresh snake of the initial length, head first, trunk trailing off
    /// to the left of it.
    #[must_use]
    pub fn new(head: Point) -> Self {
        let mut segments = [Point::INVALID; MAX_SNAKE_LENGTH];
        for (i, segment) in
            segments.iter_mut().take(INITIAL_SNAKE_LENGTH).enumerate()
        {
            *segment = Point::new(head.x - i as i64, head.y);
        }
        Self {
            segments,
            len: INITIAL_SNAKE_LENGTH,
        }
    }

    /// Builds an arbitrary body for scenario setups, truncated at capacity.
    #[must_use]
    pub fn from_points(points: &[Point]) -> Self {
        let mut segments = [Point::INVALID; MAX_SNAKE_LENGTH];
        let len = points.len().min(MAX_SNAKE_LENGTH);
        segments[..len].copy_from_slice(&points[..len]);
        Self { segments, len }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub const fn head(&self) -> Point {
        self.segments[0]
    }

    #[must_use]
    pub fn segment(&self, index: usize) -> Option<Point> {
        self.segments[..self.len].get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.segments[..self.len].iter()
    }

    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        self.segments[..self.len].contains(&point)
    }

    /// Extends the tail by one slot, silently capped at capacity. Returns
    /// whether the snake actually got longer.
    pub fn grow(&mut self) -> bool {
        if self.len < MAX_SNAKE_LENGTH {
            self.len += 1;
            true
        } else {
            false
        }
    }

    /// Shifts the trunk tailwards by one and drops the new head in front.
    /// Call `grow` first when the snake ate; the freed tail slot then picks
    /// up the old tail position instead of being discarded.
    pub fn advance(&mut self, new_head: Point) {
        for i in (1..self.len).rev() {
            self.segments[i] = self.segments[i - 1];
        }
        self.segments[0] = new_head;
    }
}
