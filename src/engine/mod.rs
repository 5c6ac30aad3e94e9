pub mod board;
pub mod snake;
pub mod state;

use log::debug;
use rand::{rngs::SmallRng, Rng, SeedableRng};

pub use self::{board::Board, snake::SnakeBody, state::GameState};
use crate::gridsnake::{
    constants::{FOOD_SPAWN_ATTEMPTS, FOOD_VALUE},
    types::{Direction, Food, Point},
};

/// The simulation state machine. Owns its random source so food placement
/// is reproducible under an injected seed; all game state lives in the
/// `GameState` values it hands out.
pub struct GameEngine<R = SmallRng> {
    rng: R,
}

impl GameEngine<SmallRng> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for GameEngine<SmallRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> GameEngine<R> {
    pub const fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Starts a game on a `width` x `height` board: snake of the initial
    /// length, head centered, trunk trailing leftwards, heading Right.
    /// Boards too small to hold the snake are the caller's problem.
    pub fn initialize(&mut self, width: i64, height: i64) -> GameState {
        let board = Board { width, height };
        let head = Point::new(width / 2, height / 2);

        let mut state = GameState {
            board,
            snake: SnakeBody::new(head),
            direction: Direction::Right,
            food: Food {
                position: Point::INVALID,
                value:    FOOD_VALUE,
            },
            score: 0,
            game_over: false,
        };

        self.spawn_food(&mut state);

        state
    }

    /// Advances the game by one cell. Returns whether anything changed,
    /// which is false only for a game that is already over.
    pub fn tick(&mut self, state: &mut GameState) -> bool {
        if state.game_over {
            return false;
        }

        // step 1 - where the head goes next, wrapped around the torus
        let new_head =
            state.board.wrap(state.snake.head().neighbour(state.direction));

        // step 2 - self collision, checked against the full pre-move body.
        // the old head counts too: on a one-cell axis the head wraps onto
        // itself.
        if state.snake.contains(new_head) {
            debug!("snake ran into itself at {new_head}");
            state.game_over = true;
            return true;
        }

        // step 3 - eat. food is respawned against the pre-move body, then
        // the growth slot is claimed; eating still scores at full length.
        if new_head == state.food.position {
            state.score += state.food.value;
            self.spawn_food(state);
            state.snake.grow();
        }

        // step 4 - shift the trunk and place the new head
        state.snake.advance(new_head);

        true
    }

    /// Places food on a random free cell: up to `FOOD_SPAWN_ATTEMPTS`
    /// uniform draws, then a row-major scan when the board is crowded. A
    /// fully occupied board leaves the previous food untouched.
    pub fn spawn_food(&mut self, state: &mut GameState) {
        for _ in 0..FOOD_SPAWN_ATTEMPTS {
            let candidate = Point::new(
                self.rng.gen_range(0..state.board.width),
                self.rng.gen_range(0..state.board.height),
            );
            if !state.snake.contains(candidate) {
                state.food = Food {
                    position: candidate,
                    value:    FOOD_VALUE,
                };
                return;
            }
        }

        debug!("food placement fell back to scanning the board");
        if let Some(cell) =
            state.board.cells().find(|cell| !state.snake.contains(*cell))
        {
            state.food = Food {
                position: cell,
                value:    FOOD_VALUE,
            };
            return;
        }

        debug!("board is full, keeping food at {}", state.food.position);
    }

    /// Starts over on the same board, discarding snake, food and score.
    pub fn reset(&mut self, state: &mut GameState) {
        *state = self.initialize(state.board.width, state.board.height);
    }
}
