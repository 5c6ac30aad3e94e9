use std::fmt;

use log::debug;

use super::{board::Board, snake::SnakeBody};
use crate::gridsnake::{
    models::Snapshot,
    types::{Direction, Food, Point},
};

/// One running (or finished) game. Fields are open for scenario setups and
/// presentation layers; the engine's operations keep the invariants.
#[derive(Clone, Debug)]
pub struct GameState {
    pub board:     Board,
    pub snake:     SnakeBody,
    pub direction: Direction,
    pub food:      Food,
    pub score:     i64,
    pub game_over: bool,
}

impl GameState {
    /// Position of the segment at `index`, `Point::INVALID` when out of
    /// range.
    #[must_use]
    pub fn segment(&self, index: usize) -> Point {
        self.snake.segment(index).unwrap_or(Point::INVALID)
    }

    #[must_use]
    pub const fn head(&self) -> Point {
        self.snake.head()
    }

    #[must_use]
    pub const fn snake_len(&self) -> usize {
        self.snake.len()
    }

    #[must_use]
    pub const fn food_position(&self) -> Point {
        self.food.position
    }

    #[must_use]
    pub const fn food(&self) -> Food {
        self.food
    }

    #[must_use]
    pub const fn score(&self) -> i64 {
        self.score
    }

    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.game_over
    }

    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Points the snake for the next tick. Reversing straight into the neck
    /// is silently rejected; later calls before a tick overwrite earlier
    /// ones. No-op once the game is over.
    pub fn set_direction(&mut self, new_direction: Direction) {
        if self.game_over {
            return;
        }
        if new_direction == self.direction.opposite() {
            debug!(
                "ignoring reversal from {} to {}",
                self.direction, new_direction
            );
            return;
        }
        self.direction = new_direction;
    }
}

impl From<&GameState> for Snapshot {
    fn from(state: &GameState) -> Self {
        Snapshot {
            width:     state.board.width,
            height:    state.board.height,
            segments:  state.snake.iter().copied().collect(),
            direction: state.direction,
            food:      state.food,
            score:     state.score,
            game_over: state.game_over,
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.board.height {
            for x in 0..self.board.width {
                let cell = Point { x, y };
                if self.snake.contains(cell) {
                    write!(f, "#")?;
                } else if cell == self.food.position {
                    write!(f, "*")?;
                } else {
                    write!(f, ".")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
