//! Game state and core simulation types
//!
//! The session singleton and every entity pool live here. There is no
//! dynamic allocation during play: all pools are fixed-capacity slot arrays.

use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::settings::Settings;

/// Session state; gates which subsystems run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Navigation/toggle input only, no simulation
    Menu,
    /// Full tick pipeline runs
    Playing,
    /// Simulation frozen, awaiting confirm
    GameOver,
}

/// Obstacle class
///
/// Per-class speed deltas and hitbox geometry are associated constants of
/// the variant rather than dynamic dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ObstacleKind {
    /// Inset hitbox, moves faster than base
    Narrow,
    #[default]
    Standard,
    /// Spans two lane-widths centered on its lane, moves slower; the
    /// periodic "boss" encounter
    Wide,
}

impl ObstacleKind {
    /// Added to the base per-tick displacement
    pub fn speed_delta(self) -> i16 {
        match self {
            ObstacleKind::Narrow => 1,
            ObstacleKind::Standard => 0,
            ObstacleKind::Wide => -1,
        }
    }

    /// Margin past the bottom edge before the slot is retired
    pub fn despawn_height(self) -> i16 {
        match self {
            ObstacleKind::Wide => 16,
            _ => 12,
        }
    }
}

/// Power-up effect kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PowerUpKind {
    #[default]
    Shield,
    Magnet,
    Refuel,
}

/// Side of the road a decoration sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoadSide {
    #[default]
    Left,
    Right,
}

/// Cosmetic decoration variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecorKind {
    #[default]
    Tree,
    Sign,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Obstacle {
    pub lane: i8,
    pub y: i16,
    pub alive: bool,
    pub kind: ObstacleKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Coin {
    pub lane: i8,
    pub y: i16,
    pub alive: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PowerUp {
    pub lane: i8,
    pub y: i16,
    pub alive: bool,
    pub kind: PowerUpKind,
}

/// Roadside decoration; recycles forever, never interacts with gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Decor {
    pub y: i16,
    pub side: RoadSide,
    pub kind: DecorKind,
}

/// Crash debris particle; inert once life hits 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Particle {
    pub pos: IVec2,
    pub vel: IVec2,
    pub life: u8,
}

/// A fixed-capacity pool slot
pub trait PoolSlot {
    fn active(&self) -> bool;
    fn deactivate(&mut self);
}

macro_rules! impl_pool_slot {
    ($ty:ty) => {
        impl PoolSlot for $ty {
            fn active(&self) -> bool {
                self.alive
            }
            fn deactivate(&mut self) {
                self.alive = false;
            }
        }
    };
}

impl_pool_slot!(Obstacle);
impl_pool_slot!(Coin);
impl_pool_slot!(PowerUp);

/// First inactive slot, or None when the pool is saturated
///
/// Saturation is not an error: spawn attempts against a full pool simply
/// skip that tick, and the cadence check fires again later.
pub fn allocate<T: PoolSlot>(pool: &mut [T]) -> Option<&mut T> {
    pool.iter_mut().find(|slot| !slot.active())
}

/// Clear a slot's active flag
pub fn retire<T: PoolSlot>(pool: &mut [T], slot: usize) {
    pool[slot].deactivate();
}

/// Menu entries, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    Start,
    Sound,
    Night,
    Difficulty,
}

impl MenuEntry {
    pub const COUNT: u8 = 4;

    pub fn from_index(idx: u8) -> Self {
        match idx {
            0 => MenuEntry::Start,
            1 => MenuEntry::Sound,
            2 => MenuEntry::Night,
            _ => MenuEntry::Difficulty,
        }
    }
}

/// Notifications emitted by the core for external collaborators
///
/// Timer commands drive the tick scheduler; the rest are fire-and-forget
/// feedback cues. Failure to act on a cue is not observable to the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Begin periodic ticking (episode start)
    TimerStart { period_ms: u16 },
    /// Drop and recreate the periodic timer with a new period (level-up)
    TimerRestart { period_ms: u16 },
    /// Halt ticking (pause-to-menu, game over)
    TimerStop,
    LaneChanged,
    CoinCollected { combo: u8 },
    PowerUpCollected { kind: PowerUpKind },
    Crashed,
    LevelUp { level: u8 },
    GameOver { new_best: bool },
    /// Back pressed outside an episode
    ExitRequested,
}

/// Complete session state
///
/// Owned exclusively by the tick-processing loop; passed by `&mut` through
/// the call chain, never shared.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub phase: Phase,
    pub player_lane: i8,
    pub score: u32,
    pub high_score: u32,
    pub level: u8,
    pub lives: u8,
    /// Current tick period in ms; the external scheduler owns the timer itself
    pub period_ms: u16,
    pub tick_count: u32,
    /// Lane-dash animation phase, wraps at DASH_TOTAL
    pub road_scroll: i16,
    pub menu_idx: u8,
    /// Preferences; persist across episodes, mutated only from the menu
    pub settings: Settings,
    pub invincible_ticks: u8,
    pub shield_ticks: u8,
    pub magnet_ticks: u8,
    pub combo: u8,
    pub combo_display: u8,
    pub obstacles: [Obstacle; MAX_OBSTACLES],
    pub coins: [Coin; MAX_COINS],
    pub powerups: [PowerUp; MAX_POWERUPS],
    pub decor: [Decor; MAX_DECOR],
    pub particles: [Particle; MAX_PARTICLES],
    pub rng: Pcg32,
}

impl GameState {
    /// Fresh session in the menu, with persisted best score and preferences
    pub fn new(seed: u64, settings: Settings, high_score: u32) -> Self {
        Self {
            phase: Phase::Menu,
            player_lane: 1,
            score: 0,
            high_score,
            level: 0,
            lives: INITIAL_LIVES,
            period_ms: settings.difficulty.base_period_ms(),
            tick_count: 0,
            road_scroll: 0,
            menu_idx: 0,
            settings,
            invincible_ticks: 0,
            shield_ticks: 0,
            magnet_ticks: 0,
            combo: 0,
            combo_display: 0,
            obstacles: [Obstacle::default(); MAX_OBSTACLES],
            coins: [Coin::default(); MAX_COINS],
            powerups: [PowerUp::default(); MAX_POWERUPS],
            decor: [Decor::default(); MAX_DECOR],
            particles: [Particle::default(); MAX_PARTICLES],
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Reset everything but preferences and the best score, enter Playing
    ///
    /// Emits the timer-start command with the tier's base period.
    pub fn start_episode(&mut self, events: &mut Vec<GameEvent>) {
        self.phase = Phase::Playing;
        self.player_lane = 1;
        self.score = 0;
        self.level = 0;
        self.lives = INITIAL_LIVES;
        self.period_ms = self.settings.difficulty.base_period_ms();
        self.tick_count = 0;
        self.road_scroll = 0;
        self.invincible_ticks = 0;
        self.shield_ticks = 0;
        self.magnet_ticks = 0;
        self.combo = 0;
        self.combo_display = 0;

        for slot in self.obstacles.iter_mut() {
            slot.alive = false;
        }
        for slot in self.coins.iter_mut() {
            slot.alive = false;
        }
        for slot in self.powerups.iter_mut() {
            slot.alive = false;
        }
        for particle in self.particles.iter_mut() {
            particle.life = 0;
        }
        self.scatter_decor();

        events.push(GameEvent::TimerStart {
            period_ms: self.period_ms,
        });
    }

    /// Randomize all decoration slots over the visible track
    fn scatter_decor(&mut self) {
        for decor in self.decor.iter_mut() {
            decor.y = self.rng.random_range(0..SCREEN_H);
            decor.side = if self.rng.random_range(0..2) == 0 {
                RoadSide::Left
            } else {
                RoadSide::Right
            };
            decor.kind = if self.rng.random_range(0..2) == 0 {
                DecorKind::Tree
            } else {
                DecorKind::Sign
            };
        }
    }

    /// Overwrite the whole particle pool with a crash burst at (cx, cy)
    pub fn spawn_particle_burst(&mut self, cx: i16, cy: i16) {
        for particle in self.particles.iter_mut() {
            particle.pos = IVec2::new(cx as i32, cy as i32);
            particle.vel = IVec2::new(
                self.rng.random_range(0..7) - 3,
                self.rng.random_range(0..7) - 3,
            );
            particle.life = 8 + self.rng.random_range(0..5) as u8;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh_state() -> GameState {
        GameState::new(7, Settings::default(), 0)
    }

    #[test]
    fn allocate_returns_first_free_slot() {
        let mut state = fresh_state();
        state.obstacles[0].alive = true;
        state.obstacles[2].alive = true;

        let slot = allocate(&mut state.obstacles).unwrap();
        slot.alive = true;
        slot.lane = 2;
        assert!(state.obstacles[1].alive);
        assert_eq!(state.obstacles[1].lane, 2);
    }

    #[test]
    fn allocate_on_full_pool_is_none() {
        let mut state = fresh_state();
        for slot in state.obstacles.iter_mut() {
            slot.alive = true;
        }
        assert!(allocate(&mut state.obstacles).is_none());
    }

    #[test]
    fn retire_clears_active_flag() {
        let mut state = fresh_state();
        state.coins[1].alive = true;
        retire(&mut state.coins, 1);
        assert!(!state.coins[1].alive);
    }

    #[test]
    fn episode_reset_preserves_prefs_and_best() {
        let mut state = fresh_state();
        state.high_score = 1234;
        state.settings.night_mode = true;
        state.score = 500;
        state.lives = 1;
        state.combo = 4;
        state.obstacles[0].alive = true;

        let mut events = Vec::new();
        state.start_episode(&mut events);

        assert_eq!(state.phase, Phase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, INITIAL_LIVES);
        assert_eq!(state.combo, 0);
        assert!(!state.obstacles[0].alive);
        assert_eq!(state.high_score, 1234);
        assert!(state.settings.night_mode);
        assert_eq!(
            events,
            vec![GameEvent::TimerStart {
                period_ms: state.settings.difficulty.base_period_ms()
            }]
        );
    }

    #[test]
    fn particle_burst_overwrites_every_slot() {
        let mut state = fresh_state();
        state.spawn_particle_burst(32, 60);
        for particle in state.particles.iter() {
            assert_eq!(particle.pos, glam::IVec2::new(32, 60));
            assert!((8..13).contains(&particle.life));
            assert!((-3..=3).contains(&particle.vel.x));
            assert!((-3..=3).contains(&particle.vel.y));
        }
    }
}
