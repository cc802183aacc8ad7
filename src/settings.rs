//! User preferences
//!
//! Sound, night mode, and difficulty persist across episodes as a small JSON
//! file. They are only mutated from the menu; the simulation and renderer
//! read them.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Difficulty tier, selected from the menu
///
/// Each tier fixes the starting tick period, the fastest period the
/// progression controller may reach, and the obstacle spawn cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    /// Tick period at level 0, in milliseconds
    pub fn base_period_ms(self) -> u16 {
        match self {
            Difficulty::Easy => 140,
            Difficulty::Normal => 120,
            Difficulty::Hard => 90,
        }
    }

    /// Floor for the tick period as levels shorten it
    pub fn min_period_ms(self) -> u16 {
        match self {
            Difficulty::Easy => 70,
            Difficulty::Normal => 50,
            Difficulty::Hard => 35,
        }
    }

    /// An obstacle spawn is attempted every this many ticks
    pub fn obstacle_cadence(self) -> u32 {
        match self {
            Difficulty::Easy => 15,
            Difficulty::Normal => 12,
            Difficulty::Hard => 9,
        }
    }

    /// Next tier in menu order (wraps)
    pub fn cycled(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Normal,
            Difficulty::Normal => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Normal => "NORMAL",
            Difficulty::Hard => "HARD",
        }
    }
}

/// Menu-editable preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Feedback cues audible
    pub sound_on: bool,
    /// Inverted palette for the renderer
    pub night_mode: bool,
    /// Gameplay difficulty tier
    pub difficulty: Difficulty,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound_on: true,
            night_mode: false,
            difficulty: Difficulty::Normal,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file, falling back to defaults on any failure
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("Settings file unreadable ({err}), using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No settings file, using defaults");
                Self::default()
            }
        }
    }

    /// Save settings as JSON; failures are logged, not surfaced
    pub fn save(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = fs::write(path, json) {
                    log::warn!("Failed to save settings: {err}");
                } else {
                    log::info!("Settings saved");
                }
            }
            Err(err) => log::warn!("Failed to serialize settings: {err}"),
        }
    }
}
