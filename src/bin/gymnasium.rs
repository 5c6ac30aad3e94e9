use color_eyre::Result;
use log::{debug, info};
use rand::{rngs::SmallRng, seq::IteratorRandom, Rng, SeedableRng};
use wrapsnake::{
    engine::GameEngine,
    gridsnake::{models::Snapshot, types::Direction},
};

struct SoakOptions {
    board_width:  i64,
    board_height: i64,
    games:        u64,
    max_ticks:    u64,
    turn_chance:  f64,
}

fn run_game(
    engine: &mut GameEngine,
    steering: &mut SmallRng,
    options: &SoakOptions,
) -> Snapshot {
    let mut state =
        engine.initialize(options.board_width, options.board_height);

    let mut ticks = 0;
    while !state.is_game_over() && ticks < options.max_ticks {
        if steering.gen_bool(options.turn_chance) {
            if let Some(direction) = Direction::iter()
                .copied()
                .filter(|d| *d != state.direction().opposite())
                .choose(steering)
            {
                state.set_direction(direction);
            }
        }

        engine.tick(&mut state);
        ticks += 1;

        if ticks % 100 == 0 {
            debug!("tick {ticks}:\n{state}");
        }
    }

    info!(
        "game ended after {ticks} ticks with score {} (length {})",
        state.score(),
        state.snake_len(),
    );

    Snapshot::from(&state)
}

fn main() -> Result<()> {
    color_eyre::install()?;
    pretty_env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0x5eed_f00d);

    info!("soaking with seed {seed}");

    let options = SoakOptions {
        board_width:  20,
        board_height: 15,
        games:        5,
        max_ticks:    10_000,
        turn_chance:  0.3,
    };

    let mut engine = GameEngine::with_seed(seed);
    let mut steering = SmallRng::seed_from_u64(seed);

    let mut last = None;
    for game in 0..options.games {
        info!("starting game {}/{}", game + 1, options.games);
        last = Some(run_game(&mut engine, &mut steering, &options));
    }

    if let Some(snapshot) = last {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    }

    Ok(())
}
