use wrapsnake::{
    engine::{GameEngine, SnakeBody},
    gridsnake::{
        constants::{FOOD_VALUE, INITIAL_SNAKE_LENGTH},
        types::{Direction, Point},
    },
};

#[test]
fn documented_walkthrough_on_a_20_by_20_board() {
    let mut engine = GameEngine::with_seed(42);
    let mut state = engine.initialize(20, 20);

    assert_eq!(state.head(), Point::new(10, 10));
    assert_eq!(state.segment(1), Point::new(9, 10));
    assert_eq!(state.segment(2), Point::new(8, 10));
    assert_eq!(state.direction(), Direction::Right);

    // keep the food away from the path for a clean movement check
    state.food.position = Point::new(0, 0);

    assert!(engine.tick(&mut state));

    assert_eq!(state.segment(0), Point::new(11, 10));
    assert_eq!(state.segment(1), Point::new(10, 10));
    assert_eq!(state.segment(2), Point::new(9, 10));
    assert_eq!(state.segment(3), Point::INVALID);
}

#[test]
fn chasing_food_grows_and_scores_step_by_step() {
    let mut engine = GameEngine::with_seed(7);
    let mut state = engine.initialize(20, 20);

    state.food.position = Point::new(11, 10);
    assert!(engine.tick(&mut state));
    assert_eq!(state.score(), FOOD_VALUE);
    assert_eq!(state.snake_len(), INITIAL_SNAKE_LENGTH + 1);

    state.food.position = Point::new(12, 10);
    assert!(engine.tick(&mut state));
    assert_eq!(state.score(), 2 * FOOD_VALUE);
    assert_eq!(state.snake_len(), INITIAL_SNAKE_LENGTH + 2);

    // head first, no duplicated cells while alive
    let segments: Vec<_> =
        (0..state.snake_len()).map(|i| state.segment(i)).collect();
    assert_eq!(segments[0], Point::new(12, 10));
    for (i, a) in segments.iter().enumerate() {
        for b in &segments[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn turning_into_the_neck_is_ignored_but_a_real_turn_kills() {
    let mut engine = GameEngine::with_seed(3);
    let mut state = engine.initialize(20, 20);
    state.food.position = Point::new(0, 0);

    // reversal is dropped, the snake keeps going Right
    state.set_direction(Direction::Left);
    assert_eq!(state.direction(), Direction::Right);
    assert!(engine.tick(&mut state));
    assert!(!state.is_game_over());

    // seed a segment directly below the head and turn into it
    state.snake = SnakeBody::from_points(&[
        Point::new(11, 10),
        Point::new(10, 10),
        Point::new(10, 11),
        Point::new(11, 11),
    ]);
    state.set_direction(Direction::Down);
    assert!(engine.tick(&mut state));
    assert!(state.is_game_over());
}

#[test]
fn long_random_runs_never_escape_the_board() {
    use rand::{rngs::SmallRng, seq::IteratorRandom, SeedableRng};

    let mut engine = GameEngine::with_seed(99);
    let mut steering = SmallRng::seed_from_u64(99);
    let mut state = engine.initialize(9, 7);

    for _ in 0..2_000 {
        if let Some(direction) =
            Direction::iter().copied().choose(&mut steering)
        {
            state.set_direction(direction);
        }
        engine.tick(&mut state);

        for i in 0..state.snake_len() {
            assert!(state.board.contains(state.segment(i)));
        }

        if state.is_game_over() {
            engine.reset(&mut state);
        }
    }
}

#[test]
fn frozen_after_game_over_until_reset() {
    let mut engine = GameEngine::with_seed(11);
    let mut state = engine.initialize(6, 6);
    state.food.position = Point::new(0, 0);

    // curl into a loop and bite the trunk
    state.snake = SnakeBody::from_points(&[
        Point::new(3, 3),
        Point::new(2, 3),
        Point::new(2, 4),
        Point::new(3, 4),
        Point::new(4, 4),
        Point::new(4, 3),
    ]);
    state.set_direction(Direction::Down);
    assert!(engine.tick(&mut state));
    assert!(state.is_game_over());

    let head = state.head();
    let score = state.score();

    // repeated reads and ticks change nothing
    for _ in 0..10 {
        assert!(!engine.tick(&mut state));
        assert!(state.is_game_over());
        assert_eq!(state.head(), head);
        assert_eq!(state.score(), score);
    }
    state.set_direction(Direction::Up);
    assert_eq!(state.direction(), Direction::Down);

    engine.reset(&mut state);
    assert!(!state.is_game_over());
    assert_eq!(state.snake_len(), INITIAL_SNAKE_LENGTH);
    assert_eq!(state.score(), 0);
    assert_eq!(state.head(), Point::new(3, 3));
}

#[test]
fn identical_seeds_replay_identical_games() {
    let mut first = GameEngine::with_seed(1234);
    let mut second = GameEngine::with_seed(1234);

    let mut a = first.initialize(12, 12);
    let mut b = second.initialize(12, 12);

    for _ in 0..200 {
        first.tick(&mut a);
        second.tick(&mut b);
        assert_eq!(a.head(), b.head());
        assert_eq!(a.food_position(), b.food_position());
        assert_eq!(a.score(), b.score());
        assert_eq!(a.is_game_over(), b.is_game_over());
    }
}
