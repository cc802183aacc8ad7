//! Audio/haptic cue descriptions
//!
//! The core never plays anything itself: it maps simulation events to tone
//! and vibration parameters, and an external sound layer is free to act on
//! them or drop them. Coin pickups pitch up with the combo counter.

use crate::sim::GameEvent;

/// A fire-and-forget feedback cue
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cue {
    /// Tone frequency in Hz, 0.0 for vibration-only cues
    pub freq_hz: f32,
    /// Tone duration in milliseconds
    pub tone_ms: u32,
    /// Vibration duration in milliseconds, 0 for none
    pub vibrate_ms: u32,
}

impl Cue {
    fn tone(freq_hz: f32, tone_ms: u32) -> Self {
        Self {
            freq_hz,
            tone_ms,
            vibrate_ms: 0,
        }
    }
}

/// Map a simulation event to its cue, if it has one
///
/// Timer commands and the exit signal are scheduler concerns, not feedback.
pub fn cue_for(event: &GameEvent) -> Option<Cue> {
    match *event {
        GameEvent::LaneChanged => Some(Cue::tone(440.0, 12)),
        GameEvent::CoinCollected { combo } => {
            Some(Cue::tone(1200.0 + combo as f32 * 100.0, 25))
        }
        GameEvent::PowerUpCollected { .. } => Some(Cue::tone(660.0, 40)),
        GameEvent::Crashed => Some(Cue {
            freq_hz: 100.0,
            tone_ms: 80,
            vibrate_ms: 80,
        }),
        GameEvent::LevelUp { .. } => Some(Cue::tone(880.0, 40)),
        GameEvent::GameOver { .. } => Some(Cue {
            freq_hz: 80.0,
            tone_ms: 200,
            vibrate_ms: 200,
        }),
        GameEvent::TimerStart { .. }
        | GameEvent::TimerRestart { .. }
        | GameEvent::TimerStop
        | GameEvent::ExitRequested => None,
    }
}
