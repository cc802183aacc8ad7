//! Spawn policy
//!
//! Each tick, three cadences are tested independently against the tick
//! counter. A spawn attempt against a saturated pool is a silent no-op and
//! consumes no randomness; the cadence check simply fires again later.

use rand::Rng;
use rand_pcg::Pcg32;

use crate::consts::*;

use super::state::{Coin, GameState, Obstacle, ObstacleKind, PowerUp, PowerUpKind, allocate};

/// Center lane, forced for boss encounters
const CENTER_LANE: i8 = LANE_COUNT / 2;

/// Run every spawn cadence due on this tick
pub fn run(state: &mut GameState) {
    if state
        .tick_count
        .is_multiple_of(state.settings.difficulty.obstacle_cadence())
    {
        spawn_obstacle(state);
    }
    if state.tick_count.is_multiple_of(COIN_CADENCE) {
        spawn_coin(state);
    }
    if state.tick_count.is_multiple_of(POWERUP_CADENCE) {
        spawn_powerup(state);
    }
}

/// Roll an obstacle's class and lane
///
/// The lane is drawn first and may be overridden by the boss gate: at level
/// multiples of 5 (level > 0) a 1-in-4 draw forces a Wide obstacle in the
/// center lane. Otherwise Narrow with probability 1/3, else Standard.
pub fn roll_obstacle(rng: &mut Pcg32, level: u8) -> (ObstacleKind, i8) {
    let lane = rng.random_range(0..LANE_COUNT);
    if level > 0 && level % 5 == 0 && rng.random_range(0..4) == 0 {
        (ObstacleKind::Wide, CENTER_LANE)
    } else if rng.random_range(0..3) == 0 {
        (ObstacleKind::Narrow, lane)
    } else {
        (ObstacleKind::Standard, lane)
    }
}

fn spawn_obstacle(state: &mut GameState) {
    if state.obstacles.iter().all(|slot| slot.alive) {
        return;
    }
    let (kind, lane) = roll_obstacle(&mut state.rng, state.level);
    if let Some(slot) = allocate(&mut state.obstacles) {
        *slot = Obstacle {
            lane,
            y: OBSTACLE_SPAWN_Y,
            alive: true,
            kind,
        };
    }
}

fn spawn_coin(state: &mut GameState) {
    if state.coins.iter().all(|slot| slot.alive) {
        return;
    }
    let lane = state.rng.random_range(0..LANE_COUNT);
    if let Some(slot) = allocate(&mut state.coins) {
        *slot = Coin {
            lane,
            y: PICKUP_SPAWN_Y,
            alive: true,
        };
    }
}

fn spawn_powerup(state: &mut GameState) {
    if state.powerups.iter().all(|slot| slot.alive) {
        return;
    }
    let lane = state.rng.random_range(0..LANE_COUNT);
    let kind = match state.rng.random_range(0..3) {
        0 => PowerUpKind::Shield,
        1 => PowerUpKind::Magnet,
        _ => PowerUpKind::Refuel,
    };
    if let Some(slot) = allocate(&mut state.powerups) {
        *slot = PowerUp {
            lane,
            y: PICKUP_SPAWN_Y,
            alive: true,
            kind,
        };
    }
}
