//! Lane Racer entry point
//!
//! Headless demo: runs one autopiloted episode end to end, driving the
//! simulation from a sleep-based periodic scheduler that is restarted
//! whenever the core asks for a new tick period.

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use rand::Rng;

use lane_racer::consts::*;
use lane_racer::feedback::cue_for;
use lane_racer::sim::{
    GameEvent, GameState, InputKey, InputKind, ObstacleKind, Phase, handle_input, tick,
};
use lane_racer::{BestScore, Settings};

fn data_path(file: &str) -> PathBuf {
    std::env::temp_dir().join(file)
}

/// Steer away from whatever is about to reach the player's row
fn autopilot(state: &GameState) -> Option<InputKey> {
    if state.phase != Phase::Playing {
        return None;
    }

    let mut danger = [false; LANE_COUNT as usize];
    for obstacle in state.obstacles.iter().filter(|o| o.alive) {
        if !(PLAYER_Y - 40..=PLAYER_Y + CAR_H).contains(&obstacle.y) {
            continue;
        }
        let lane = obstacle.lane as usize;
        danger[lane] = true;
        if obstacle.kind == ObstacleKind::Wide {
            if lane > 0 {
                danger[lane - 1] = true;
            }
            if lane + 1 < LANE_COUNT as usize {
                danger[lane + 1] = true;
            }
        }
    }

    let current = state.player_lane as usize;
    if !danger[current] {
        return None;
    }
    if current > 0 && !danger[current - 1] {
        return Some(InputKey::Left);
    }
    if current + 1 < LANE_COUNT as usize && !danger[current + 1] {
        return Some(InputKey::Right);
    }
    // Boxed in; ride it out on the grace window
    None
}

fn main() {
    env_logger::init();

    let settings_path = data_path("lane_racer_settings.json");
    let best_path = data_path("lane_racer_best.json");
    let settings = Settings::load(&settings_path);
    let mut best = BestScore::load(&best_path);

    let seed: u64 = rand::rng().random();
    log::info!("Starting demo episode, seed {seed}, best {}", best.score);

    let mut state = GameState::new(seed, settings, best.score);
    let mut events: Vec<GameEvent> = Vec::new();

    // Select START from the menu
    handle_input(&mut state, InputKey::Ok, InputKind::Press, &mut events);

    let mut period_ms = state.period_ms;
    let mut running = true;

    while running {
        for event in events.drain(..) {
            match event {
                GameEvent::TimerStart { period_ms: p } | GameEvent::TimerRestart { period_ms: p } => {
                    // Drop-and-recreate scheduling: the new period applies
                    // from the next tick
                    period_ms = p;
                }
                GameEvent::TimerStop => {}
                GameEvent::GameOver { new_best } => {
                    if new_best {
                        best.update(state.score, &best_path);
                    }
                    log::info!(
                        "Episode over: score {}, level {}, best {}",
                        state.score,
                        state.level,
                        best.score
                    );
                    running = false;
                }
                GameEvent::ExitRequested => running = false,
                other => {
                    if state.settings.sound_on
                        && let Some(cue) = cue_for(&other)
                    {
                        log::debug!("{other:?} -> {cue:?}");
                    }
                }
            }
        }
        if !running || state.phase != Phase::Playing {
            break;
        }

        thread::sleep(Duration::from_millis(period_ms as u64));
        if let Some(key) = autopilot(&state) {
            handle_input(&mut state, key, InputKind::Press, &mut events);
        }
        tick(&mut state, &mut events);
    }

    state.settings.save(&settings_path);
}
