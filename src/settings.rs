//! Run configuration
//!
//! Loaded from a JSON file; anything missing falls back to defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::sim::{GravityPolicy, JumpPolicy, Rules, ScorePolicy};

/// Rule presets matching the game's revisions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Revision {
    /// Damped jumps and time-based scoring
    Early,
    #[default]
    Final,
}

impl Revision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Revision::Early => "Early",
            Revision::Final => "Final",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "early" | "legacy" => Some(Revision::Early),
            "final" => Some(Revision::Final),
            _ => None,
        }
    }

    pub fn gravity(&self) -> GravityPolicy {
        match self {
            Revision::Early => GravityPolicy::ExponentialDamping,
            Revision::Final => GravityPolicy::ConstantGravity,
        }
    }

    pub fn scoring(&self) -> ScorePolicy {
        match self {
            Revision::Early => ScorePolicy::TimeBased,
            Revision::Final => ScorePolicy::PassThrough,
        }
    }
}

/// Game settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Preset the gravity and scoring policies come from
    pub revision: Revision,

    // === Rules ===
    /// Overrides the revision's gravity when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gravity: Option<GravityPolicy>,
    pub jump: JumpPolicy,
    /// Overrides the revision's scoring when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scoring: Option<ScorePolicy>,
    /// RNG seed for pipe placement
    pub seed: u64,

    // === Host run ===
    /// Let the autopilot play
    pub autopilot: bool,
    /// Frames the binary runs before exiting
    pub demo_frames: u64,
    /// Refresh rate the host display paces to (0 = unpaced)
    pub frame_rate: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            revision: Revision::default(),
            gravity: None,
            jump: JumpPolicy::default(),
            scoring: None,
            seed: 0x5EED,
            autopilot: true,
            demo_frames: 1800,
            frame_rate: 0,
        }
    }
}

impl Settings {
    /// Create settings from a revision preset
    pub fn from_preset(revision: Revision) -> Self {
        let mut settings = Self::default();
        settings.apply_preset(revision);
        settings
    }

    /// Apply a revision preset (drops overrides of the policies it governs)
    pub fn apply_preset(&mut self, revision: Revision) {
        self.revision = revision;
        self.gravity = None;
        self.scoring = None;
    }

    /// Policies for a new session
    pub fn rules(&self) -> Rules {
        Rules {
            gravity: self.gravity.unwrap_or_else(|| self.revision.gravity()),
            jump: self.jump,
            scoring: self.scoring.unwrap_or_else(|| self.revision.scoring()),
        }
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("Ignoring malformed settings {}: {}", path.display(), err);
                    Self::default()
                }
            },
            Err(err) => {
                log::warn!("Using default settings ({}: {})", path.display(), err);
                Self::default()
            }
        }
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = std::fs::write(path, json) {
                    log::warn!("Could not save settings to {}: {}", path.display(), err);
                } else {
                    log::info!("Settings saved to {}", path.display());
                }
            }
            Err(err) => log::warn!("Could not serialize settings: {}", err),
        }
    }
}
