use crate::errors::SetupResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Reward values handed out by the episode controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardTable {
    /// Given when the player is defeated.
    pub defeat: i32,
    /// Given for each enemy defeated.
    pub kill: i32,
    /// Bonus for reaching the encounter quota.
    pub clear: i32,
}

impl Default for RewardTable {
    fn default() -> Self {
        Self {
            defeat: -20,
            kill: 1,
            clear: 10,
        }
    }
}

/// Settings for building a [`Simulation`](crate::simulation::Simulation).
///
/// Every field has a default, so a RON file only needs the values it changes:
///
/// ```ron
/// (scenario: "castle", seed: Some(7))
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Directory with unit and scenario tables; the bundled data when unset.
    pub data_dir: Option<PathBuf>,
    pub scenario: String,
    /// Seed for the episode RNG; drawn from the OS when unset.
    pub seed: Option<u64>,
    /// Enemies to defeat before the episode ends.
    pub encounter_quota: u32,
    pub rewards: RewardTable,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            scenario: "default".to_string(),
            seed: None,
            encounter_quota: 10,
            rewards: RewardTable::default(),
        }
    }
}

impl SimulationConfig {
    /// Load a configuration from a RON file.
    pub fn load(path: &Path) -> SetupResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_ron_str(&text)
    }

    pub fn from_ron_str(text: &str) -> SetupResult<Self> {
        Ok(ron::from_str(text)?)
    }
}
