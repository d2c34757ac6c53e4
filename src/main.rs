//! Invaders headless entry point
//!
//! Runs the simulation with the demo autopilot and prints a JSON summary.
//! Usage: `invaders [settings.json] [frames]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::path::Path;

    use invaders::Settings;
    use invaders::sim::{GameEvent, GameState, TickInput, tick};
    use serde::Serialize;

    /// Final report printed on stdout
    #[derive(Serialize)]
    struct SessionSummary {
        seed: u64,
        frames: u64,
        elapsed_secs: f32,
        score: u64,
        high_score: u64,
        level: u32,
        lives: u8,
        game_over: bool,
    }

    const FRAME_DT: f32 = 1.0 / 60.0;
    const DEFAULT_FRAMES: u64 = 60 * 120;

    env_logger::init();
    log::info!("Invaders (headless) starting...");

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load(Path::new(&path)),
        None => Settings::default(),
    };
    let frames = match args.next().map(|s| s.parse::<u64>()) {
        Some(Ok(n)) => n,
        Some(Err(e)) => {
            log::warn!("Bad frame count ({}), using {}", e, DEFAULT_FRAMES);
            DEFAULT_FRAMES
        }
        None => DEFAULT_FRAMES,
    };

    let seed = settings.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });
    log::info!(
        "Seed {} / {} / {} frames",
        seed,
        settings.difficulty.as_str(),
        frames
    );

    let mut state = GameState::with_settings(&settings, seed);
    let input = TickInput {
        idle_mode: true,
        ..Default::default()
    };

    let mut ran = 0;
    while ran < frames {
        tick(&mut state, &input, FRAME_DT);
        ran += 1;

        for event in &state.events {
            match event {
                GameEvent::ShipHit { lives } => log::debug!("Ship hit, {} lives left", lives),
                GameEvent::BonusDestroyed { points } => log::info!("Bonus craft down (+{})", points),
                _ => {}
            }
        }

        if ran % 600 == 0 {
            log::info!("{}", state.hud_text());
        }
        if state.is_game_over() {
            break;
        }
    }

    let summary = SessionSummary {
        seed,
        frames: ran,
        elapsed_secs: state.elapsed,
        score: state.score,
        high_score: state.high_score.max(state.score),
        level: state.level,
        lives: state.ship.lives,
        game_over: state.is_game_over(),
    };
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Could not encode summary: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The library is driven by the host page on the web
}
