//! Preset walk sizes

use std::{fmt, str::FromStr};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// The three registered walk sizes, named by their number of
/// non-terminal states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum WalkingPreset {
    #[default]
    Walking5,
    Walking7,
    Walking9,
}

impl WalkingPreset {
    /// Total number of states, terminals included.
    pub const fn n_states(self) -> usize {
        match self {
            WalkingPreset::Walking5 => 7,
            WalkingPreset::Walking7 => 9,
            WalkingPreset::Walking9 => 11,
        }
    }

    /// Episode step cap applied by the time-limit wrapper.
    pub const fn max_episode_steps(self) -> usize {
        match self {
            WalkingPreset::Walking5 => 500,
            WalkingPreset::Walking7 | WalkingPreset::Walking9 => 1000,
        }
    }

    /// Versioned identifier, e.g. `Walking5-v0`.
    pub const fn id(self) -> &'static str {
        match self {
            WalkingPreset::Walking5 => "Walking5-v0",
            WalkingPreset::Walking7 => "Walking7-v0",
            WalkingPreset::Walking9 => "Walking9-v0",
        }
    }
}

impl fmt::Display for WalkingPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for WalkingPreset {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        let normalized = input.trim().to_ascii_lowercase();
        let stem = normalized.strip_suffix("-v0").unwrap_or(&normalized);
        match stem {
            "walking5" | "5" => Ok(WalkingPreset::Walking5),
            "walking7" | "7" => Ok(WalkingPreset::Walking7),
            "walking9" | "9" => Ok(WalkingPreset::Walking9),
            _ => Err(Error::config(format!(
                "unknown walk preset '{input}' (expected walking5, walking7 or walking9)"
            ))),
        }
    }
}
