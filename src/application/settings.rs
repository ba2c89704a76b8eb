use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::{Topology, Universe};

/// Startup configuration handed to the universe by its owner.
///
/// Every field has a default, so a partial document (or none at all)
/// deserializes into a usable value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub width: usize,
    pub height: usize,
    pub topology: Topology,
    pub seed: u64,
    /// Milliseconds between generations while running
    pub interval_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: 25,
            height: 25,
            topology: Topology::Toroidal,
            seed: 0,
            interval_ms: 1,
        }
    }
}

impl Settings {
    /// Tick interval, never shorter than one millisecond
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.max(1))
    }
}

impl Universe {
    /// Build an empty universe from startup settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.width, settings.height, settings.topology, settings.seed)
    }
}
