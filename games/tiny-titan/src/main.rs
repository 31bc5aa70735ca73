use std::path::Path;
use std::process::ExitCode;

use log::LevelFilter;
use titan_engine::{InputEvent, ResourcePaths};
use titan_host::{init_logging, GameRunner, HighScoreStore};
use tiny_titan::{events, game_events, Autopilot, GameError, GameSettings, TinyTitan, RESOURCES_ENV};

fn main() -> ExitCode {
    init_logging(LevelFilter::Info);
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("tiny-titan: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Usage: `tiny-titan [settings.json]`
fn run() -> Result<(), GameError> {
    let settings = match std::env::args_os().nth(1) {
        Some(path) => GameSettings::load(Path::new(&path))?,
        None => GameSettings::default(),
    };

    let paths = ResourcePaths::resolve(settings.resources_dir.as_deref(), RESOURCES_ENV)?;
    let store = HighScoreStore::new(paths.join(&settings.high_score_file));
    let stored = store.load();

    let dt = settings.fixed_dt;
    let frames = (settings.run_seconds / dt).round() as u64;
    let pilot = Autopilot::new(&settings.keys, 1.0 / dt);

    let mut runner = GameRunner::new(TinyTitan::load(settings, &paths, stored)?);
    runner.init();

    let mut result = None;
    for frame in 0..frames {
        for event in pilot.inputs(frame) {
            runner.push_input(event);
        }
        runner.tick(dt);
        result = result.or_else(|| game_over(&runner));
        if result.is_some() {
            break;
        }
    }

    // Time ran out: leave the way the back button does.
    if result.is_none() {
        runner.push_input(InputEvent::Custom { kind: events::BACK, a: 0.0, b: 0.0, c: 0.0 });
        for _ in 0..10 {
            runner.tick(dt);
            result = game_over(&runner);
            if result.is_some() {
                break;
            }
        }
    }

    let (score, high_score) = result.unwrap_or((0, stored));
    if high_score > stored {
        store.save(high_score)?;
    }
    log::info!(
        "tiny-titan: {} steps, score {score}, high score {high_score}, health {}",
        runner.steps(),
        runner.game().hud().health,
    );
    Ok(())
}

/// Score and high score from this frame's game-over event, if any.
fn game_over(runner: &GameRunner<TinyTitan>) -> Option<(u32, u32)> {
    runner
        .events()
        .iter()
        .find(|e| e.kind == game_events::GAME_OVER)
        .map(|e| (e.a as u32, e.b as u32))
}
