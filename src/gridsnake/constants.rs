/// Hard cap on how long the snake can grow.
pub const MAX_SNAKE_LENGTH: usize = 100;

/// How long the snake is right after initialization.
pub const INITIAL_SNAKE_LENGTH: usize = 3;

/// Score awarded for every piece of food.
pub const FOOD_VALUE: i64 = 10;

/// Random draws before food placement falls back to a full board scan.
pub const FOOD_SPAWN_ATTEMPTS: u32 = 100;
