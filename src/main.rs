//! Pixel Platformer entry point
//!
//! Headless native driver: runs one round with a scripted autopilot and
//! records the terminal score. Windowing and rendering live in the host.
//!
//! Usage: `pixel-platformer [easy|hard] [seed]`
//! - `PLATFORMER_TUNING`: optional path to a tuning JSON file
//! - `PLATFORMER_SCORES`: high score file (default `high_scores.json`)

use pixel_platformer::sim::{Difficulty, FrameInput, GameEvent, Level, Round, RoundState};
use pixel_platformer::{HighScores, Tuning};

/// Give up after this many frames (one minute at 60 Hz)
const MAX_FRAMES: u32 = 60 * 60;
const DEFAULT_SCORES_PATH: &str = "high_scores.json";

/// Run right, hop whenever there's ground underfoot
fn autopilot(state: &RoundState) -> FrameInput {
    FrameInput {
        move_right: true,
        jump: state.avatar.is_grounded(),
        ..FrameInput::default()
    }
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let difficulty = args
        .next()
        .and_then(|s| Difficulty::from_str(&s))
        .unwrap_or_default();
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(0x5eed);

    let tuning = match std::env::var("PLATFORMER_TUNING") {
        Ok(path) => match Tuning::load(&path) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::warn!("Ignoring tuning file {}: {}", path, e);
                Tuning::default()
            }
        },
        Err(_) => Tuning::default(),
    };

    let scores_path =
        std::env::var("PLATFORMER_SCORES").unwrap_or_else(|_| DEFAULT_SCORES_PATH.to_string());
    let mut high_scores = HighScores::load(&scores_path).unwrap_or_else(|e| {
        log::warn!("Unreadable high score file {}: {}", scores_path, e);
        HighScores::new()
    });

    log::info!(
        "Pixel Platformer (headless) starting: {} level, seed {}",
        difficulty.as_str(),
        seed
    );

    let mut round = match Round::new(Level::builtin(difficulty), tuning, seed) {
        Ok(round) => round,
        Err(e) => {
            log::error!("Could not start round: {}", e);
            std::process::exit(1);
        }
    };

    for _ in 0..MAX_FRAMES {
        let input = autopilot(round.state());
        for event in round.on_frame(&input) {
            match event {
                GameEvent::RoundEnded { outcome, score } => {
                    println!("Round ended: {:?} with score {}", outcome, score);
                    if let Some(rank) = high_scores.record_terminal_score(difficulty, score) {
                        println!("New high score! Rank {}", rank);
                        if let Err(e) = high_scores.save(&scores_path) {
                            log::warn!("Could not save high scores: {}", e);
                        }
                    }
                }
                GameEvent::CoinCollected { score, .. } => println!("Coin! Score: {}", score),
                other => log::debug!("{:?}", other),
            }
        }
        if round.phase().is_terminal() {
            break;
        }
    }

    if !round.phase().is_terminal() {
        println!(
            "Out of time after {} frames, score {}",
            round.state().time_ticks,
            round.score()
        );
    }
    for (rank, score) in high_scores.scores(difficulty).iter().enumerate() {
        println!("{}. {}", rank + 1, score);
    }
}
