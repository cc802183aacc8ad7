//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Discrete ticks only, driven by an external scheduler
//! - Seeded RNG only
//! - Fixed-capacity pools, stable slot-scan order
//! - No rendering, audio, or storage dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Hitbox, find_player_collision, obstacle_hitbox, pickup_hitbox, player_hitbox};
pub use state::{
    Coin, Decor, DecorKind, GameEvent, GameState, MenuEntry, Obstacle, ObstacleKind, Particle,
    Phase, PoolSlot, PowerUp, PowerUpKind, RoadSide, allocate, retire,
};
pub use tick::{InputKey, InputKind, handle_input, tick};
