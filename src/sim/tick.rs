//! Fixed timestep simulation tick and input handling
//!
//! One tick or one input event is processed to completion at a time; the
//! external scheduler never interleaves them. The tick pipeline during
//! Playing: spawn policy, motion and lifecycle, collection resolve, crash
//! resolve, status-effect decay, progression.

use rand::Rng;

use crate::consts::*;
use crate::lane_center_x;

use super::collision::{find_player_collision, pickup_hitbox, player_hitbox};
use super::spawn;
use super::state::{DecorKind, GameEvent, GameState, MenuEntry, Phase, PowerUpKind, RoadSide, retire};

/// Logical keys delivered by the external input source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    Up,
    Down,
    Left,
    Right,
    Ok,
    Back,
}

/// Press/repeat/release discriminator
///
/// Repeats act exactly like presses; releases are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Press,
    Repeat,
    Release,
}

/// Apply one discrete key event to the session state machine
///
/// Every key is defined (possibly as a no-op) in every phase.
pub fn handle_input(
    state: &mut GameState,
    key: InputKey,
    kind: InputKind,
    events: &mut Vec<GameEvent>,
) {
    if kind == InputKind::Release {
        return;
    }

    match state.phase {
        Phase::Menu => match key {
            InputKey::Up => {
                state.menu_idx = if state.menu_idx == 0 {
                    MenuEntry::COUNT - 1
                } else {
                    state.menu_idx - 1
                };
            }
            InputKey::Down => {
                state.menu_idx = (state.menu_idx + 1) % MenuEntry::COUNT;
            }
            InputKey::Ok => match MenuEntry::from_index(state.menu_idx) {
                MenuEntry::Start => state.start_episode(events),
                MenuEntry::Sound => state.settings.sound_on = !state.settings.sound_on,
                MenuEntry::Night => state.settings.night_mode = !state.settings.night_mode,
                MenuEntry::Difficulty => {
                    state.settings.difficulty = state.settings.difficulty.cycled();
                }
            },
            InputKey::Back => events.push(GameEvent::ExitRequested),
            InputKey::Left | InputKey::Right => {}
        },

        Phase::Playing => match key {
            InputKey::Left => {
                if state.player_lane > 0 {
                    state.player_lane -= 1;
                    events.push(GameEvent::LaneChanged);
                }
            }
            InputKey::Right => {
                if state.player_lane < LANE_COUNT - 1 {
                    state.player_lane += 1;
                    events.push(GameEvent::LaneChanged);
                }
            }
            InputKey::Back => {
                // Cancel back to the menu without running game-over logic
                state.phase = Phase::Menu;
                events.push(GameEvent::TimerStop);
            }
            InputKey::Up | InputKey::Down | InputKey::Ok => {}
        },

        Phase::GameOver => match key {
            InputKey::Ok => state.phase = Phase::Menu,
            InputKey::Back => events.push(GameEvent::ExitRequested),
            _ => {}
        },
    }
}

/// Advance the simulation by one tick; no-op outside Playing
pub fn tick(state: &mut GameState, events: &mut Vec<GameEvent>) {
    if state.phase != Phase::Playing {
        return;
    }

    state.tick_count += 1;
    state.road_scroll = (state.road_scroll + 3) % DASH_TOTAL;

    spawn::run(state);
    update_motion(state);
    resolve_collections(state, events);
    if resolve_crash(state, events) {
        // Fatal crash; the session is frozen as-is
        return;
    }
    decay_effects(state);
    advance_level(state, events);
}

/// Move every active entity, retiring those past the bottom edge
fn update_motion(state: &mut GameState) {
    let base = 3 + (state.level / 2) as i16;

    for idx in 0..MAX_OBSTACLES {
        if !state.obstacles[idx].alive {
            continue;
        }
        let kind = state.obstacles[idx].kind;
        state.obstacles[idx].y += base + kind.speed_delta();
        if state.obstacles[idx].y > SCREEN_H + kind.despawn_height() {
            retire(&mut state.obstacles, idx);
            // A dodged obstacle is worth points
            state.score += DODGE_SCORE;
        }
    }

    for idx in 0..MAX_COINS {
        if state.coins[idx].alive {
            state.coins[idx].y += base;
            if state.coins[idx].y > SCREEN_H {
                retire(&mut state.coins, idx);
            }
        }
    }

    for idx in 0..MAX_POWERUPS {
        if state.powerups[idx].alive {
            state.powerups[idx].y += base;
            if state.powerups[idx].y > SCREEN_H {
                retire(&mut state.powerups, idx);
            }
        }
    }

    // Decorations scroll at a constant rate and wrap, never retire
    for decor in state.decor.iter_mut() {
        decor.y += 2;
        if decor.y > SCREEN_H + 5 {
            decor.y = -state.rng.random_range(0..20);
            decor.side = if state.rng.random_range(0..2) == 0 {
                RoadSide::Left
            } else {
                RoadSide::Right
            };
            decor.kind = if state.rng.random_range(0..2) == 0 {
                DecorKind::Tree
            } else {
                DecorKind::Sign
            };
        }
    }

    // Particles coast until their life runs out; slots stay inert until the
    // next burst overwrites the whole pool
    for particle in state.particles.iter_mut() {
        if particle.life > 0 {
            particle.pos += particle.vel;
            particle.life -= 1;
        }
    }
}

/// Coin and power-up collection, including magnet-assisted attraction
///
/// A magnet pull and a collection are mutually exclusive for a given coin
/// within one tick: a coin that is pulled is never collected until a later
/// tick actually overlaps it.
fn resolve_collections(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let player = player_hitbox(state.player_lane);

    for idx in 0..MAX_COINS {
        let coin = state.coins[idx];
        if !coin.alive {
            continue;
        }
        let touch = player.overlaps(&pickup_hitbox(coin.lane, coin.y));
        let magnet_pull =
            state.magnet_ticks > 0 && (coin.y - PLAYER_Y).abs() < MAGNET_RANGE && !touch;

        if magnet_pull {
            // Step the coin toward the player's row and lane
            let coin = &mut state.coins[idx];
            coin.y += if coin.y < PLAYER_Y {
                MAGNET_PULL_STEP
            } else {
                -MAGNET_PULL_STEP
            };
            if coin.lane < state.player_lane {
                coin.lane += 1;
            } else if coin.lane > state.player_lane {
                coin.lane -= 1;
            }
        } else if touch {
            retire(&mut state.coins, idx);
            state.combo = state.combo.saturating_add(1);
            state.combo_display = COMBO_DISPLAY_TICKS;
            state.score += COIN_SCORE * state.combo.max(1) as u32;
            events.push(GameEvent::CoinCollected { combo: state.combo });
        }
    }

    for idx in 0..MAX_POWERUPS {
        let powerup = state.powerups[idx];
        if !powerup.alive {
            continue;
        }
        if player.overlaps(&pickup_hitbox(powerup.lane, powerup.y)) {
            retire(&mut state.powerups, idx);
            match powerup.kind {
                PowerUpKind::Shield => state.shield_ticks = SHIELD_TICKS,
                PowerUpKind::Magnet => state.magnet_ticks = MAGNET_TICKS,
                PowerUpKind::Refuel => {
                    // Silently absorbed at the cap
                    if state.lives < MAX_LIVES {
                        state.lives += 1;
                    }
                }
            }
            events.push(GameEvent::PowerUpCollected { kind: powerup.kind });
        }
    }
}

/// Player-vs-obstacle collision; returns true when the episode ended
///
/// Ignored entirely while the grace window or a shield is active.
fn resolve_crash(state: &mut GameState, events: &mut Vec<GameEvent>) -> bool {
    if state.invincible_ticks > 0 || state.shield_ticks > 0 {
        return false;
    }
    if find_player_collision(state).is_none() {
        return false;
    }

    state.lives = state.lives.saturating_sub(1);
    state.combo = 0;
    state.spawn_particle_burst(lane_center_x(state.player_lane), PLAYER_Y + CAR_H / 2);
    events.push(GameEvent::Crashed);

    if state.lives == 0 {
        state.phase = Phase::GameOver;
        let new_best = state.score > state.high_score;
        if new_best {
            state.high_score = state.score;
        }
        events.push(GameEvent::TimerStop);
        events.push(GameEvent::GameOver { new_best });
        log::info!(
            "Game over: score {} (best {}), level {}",
            state.score,
            state.high_score,
            state.level
        );
        return true;
    }

    state.invincible_ticks = CRASH_GRACE_TICKS;
    false
}

/// Count down every timed status effect
fn decay_effects(state: &mut GameState) {
    state.invincible_ticks = state.invincible_ticks.saturating_sub(1);
    state.shield_ticks = state.shield_ticks.saturating_sub(1);
    state.magnet_ticks = state.magnet_ticks.saturating_sub(1);
    state.combo_display = state.combo_display.saturating_sub(1);
}

/// Map cumulative score to the level index and reschedule on a level-up
///
/// Runs after score mutations so `level == min(score / 200, 9)` holds at
/// every tick boundary. The new tick period takes effect from the next tick
/// via a timer restart, never an in-place mutation.
fn advance_level(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let next = ((state.score / LEVEL_SCORE_STEP) as u8).min(MAX_LEVEL);
    if next > state.level {
        state.level = next;
        let difficulty = state.settings.difficulty;
        let period = difficulty
            .base_period_ms()
            .saturating_sub(state.level as u16 * 8)
            .max(difficulty.min_period_ms());
        state.period_ms = period;
        events.push(GameEvent::LevelUp { level: next });
        events.push(GameEvent::TimerRestart { period_ms: period });
        log::debug!("Level {} reached, tick period now {} ms", next, period);
    }
}
