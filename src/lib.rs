//! Lane Racer - a lane-based arcade racer simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entity pools, spawning, collisions, session state)
//! - `settings`: User preferences (sound, night mode, difficulty)
//! - `highscore`: Single-scalar best-score persistence
//! - `feedback`: Audio/haptic cue descriptions for an external sound layer
//!
//! Rendering, audio playback, and the periodic tick timer are external
//! collaborators: the core consumes discrete tick and key events and exposes
//! read-only state snapshots plus fire-and-forget [`sim::GameEvent`]s.

pub mod feedback;
pub mod highscore;
pub mod settings;
pub mod sim;

pub use highscore::BestScore;
pub use settings::{Difficulty, Settings};

/// Game configuration constants
pub mod consts {
    /// Screen dimensions (portrait)
    pub const SCREEN_W: i16 = 64;
    pub const SCREEN_H: i16 = 128;

    /// Road corridor edges and derived lane geometry
    pub const ROAD_LEFT: i16 = 10;
    pub const ROAD_RIGHT: i16 = 53;
    pub const ROAD_WIDTH: i16 = ROAD_RIGHT - ROAD_LEFT;
    pub const LANE_COUNT: i8 = 3;
    pub const LANE_WIDTH: i16 = ROAD_WIDTH / LANE_COUNT as i16;

    /// Player car box and fixed row
    pub const CAR_W: i16 = 10;
    pub const CAR_H: i16 = 13;
    pub const PLAYER_Y: i16 = 105;

    /// Pool capacities
    pub const MAX_OBSTACLES: usize = 5;
    pub const MAX_COINS: usize = 3;
    pub const MAX_POWERUPS: usize = 2;
    pub const MAX_DECOR: usize = 6;
    pub const MAX_PARTICLES: usize = 12;

    /// Lives
    pub const INITIAL_LIVES: u8 = 3;
    pub const MAX_LIVES: u8 = 5;

    /// Lane-dash animation period (dash + gap), road scroll wraps at this
    pub const DASH_LEN: i16 = 8;
    pub const DASH_GAP: i16 = 8;
    pub const DASH_TOTAL: i16 = DASH_LEN + DASH_GAP;

    /// Entities enter just above the visible top edge
    pub const OBSTACLE_SPAWN_Y: i16 = -18;
    pub const PICKUP_SPAWN_Y: i16 = -12;

    /// Spawn cadences in ticks (obstacle cadence is difficulty-dependent)
    pub const COIN_CADENCE: u32 = 18;
    pub const POWERUP_CADENCE: u32 = 60;

    /// Timed status effects, in ticks
    pub const SHIELD_TICKS: u8 = 50;
    pub const MAGNET_TICKS: u8 = 60;
    /// Post-crash grace window during which collisions are ignored
    pub const CRASH_GRACE_TICKS: u8 = 20;
    /// How long the combo multiplier stays on screen after a pickup
    pub const COMBO_DISPLAY_TICKS: u8 = 15;

    /// Magnet pull range (vertical distance) and per-tick pull step
    pub const MAGNET_RANGE: i16 = 30;
    pub const MAGNET_PULL_STEP: i16 = 4;

    /// Scoring
    pub const COIN_SCORE: u32 = 25;
    pub const DODGE_SCORE: u32 = 10;
    /// Score per level step; level is capped at MAX_LEVEL
    pub const LEVEL_SCORE_STEP: u32 = 200;
    pub const MAX_LEVEL: u8 = 9;
}

/// Center x of a lane
#[inline]
pub fn lane_center_x(lane: i8) -> i16 {
    consts::ROAD_LEFT + consts::LANE_WIDTH / 2 + lane as i16 * consts::LANE_WIDTH
}

/// Left edge x of a car-sized box centered in a lane
#[inline]
pub fn lane_left_x(lane: i8) -> i16 {
    lane_center_x(lane) - consts::CAR_W / 2
}
