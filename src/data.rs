use crate::errors::{SetupError, SetupResult};
use schema::{ScenarioRecord, UnitRecord};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

const BUNDLED_PLAYERS: &str = include_str!("../data/players.ron");
const BUNDLED_ENEMIES: &str = include_str!("../data/enemies.ron");
const BUNDLED_SCENARIOS: &str = include_str!("../data/scenarios.ron");

/// Every static record a simulation can be built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameData {
    pub players: Vec<UnitRecord>,
    pub enemies: Vec<UnitRecord>,
    pub scenarios: Vec<ScenarioRecord>,
}

impl GameData {
    /// The data tables compiled into the crate.
    pub fn bundled() -> SetupResult<Self> {
        Ok(Self {
            players: ron::from_str(BUNDLED_PLAYERS)?,
            enemies: ron::from_str(BUNDLED_ENEMIES)?,
            scenarios: ron::from_str(BUNDLED_SCENARIOS)?,
        })
    }

    /// Load `players`, `enemies` and `scenarios` tables from a directory.
    ///
    /// Each table may be a `.ron` or a `.json` file; RON wins when both exist.
    pub fn load_dir(dir: &Path) -> SetupResult<Self> {
        let data = Self {
            players: load_table(dir, "players")?,
            enemies: load_table(dir, "enemies")?,
            scenarios: load_table(dir, "scenarios")?,
        };
        tracing::info!(
            dir = %dir.display(),
            players = data.players.len(),
            enemies = data.enemies.len(),
            scenarios = data.scenarios.len(),
            "loaded game data"
        );
        Ok(data)
    }

    pub fn scenario(&self, code: &str) -> SetupResult<&ScenarioRecord> {
        self.scenarios
            .iter()
            .find(|scenario| scenario.scenario_code == code)
            .ok_or_else(|| SetupError::ScenarioNotFound(code.to_string()))
    }

    pub fn player_for_level(&self, level: u32) -> SetupResult<&UnitRecord> {
        self.players
            .iter()
            .find(|record| record.level == Some(level))
            .ok_or(SetupError::PlayerLevelNotFound(level))
    }

    /// The enemy records a scenario draws encounters from, in roster order.
    pub fn roster(&self, scenario: &ScenarioRecord) -> SetupResult<Vec<&UnitRecord>> {
        if scenario.enemies.is_empty() {
            return Err(SetupError::EmptyRoster(scenario.scenario_code.clone()));
        }
        scenario
            .enemies
            .iter()
            .map(|&id| {
                self.enemies
                    .iter()
                    .find(|record| record.id == id)
                    .ok_or_else(|| SetupError::EnemyNotFound {
                        scenario: scenario.scenario_code.clone(),
                        id,
                    })
            })
            .collect()
    }
}

fn load_table<T: DeserializeOwned>(dir: &Path, name: &str) -> SetupResult<T> {
    for extension in ["ron", "json"] {
        let path = dir.join(format!("{}.{}", name, extension));
        if path.exists() {
            return parse_file(&path);
        }
    }
    Err(SetupError::MissingDataFile {
        dir: dir.to_path_buf(),
        name: name.to_string(),
    })
}

/// Parse a RON or JSON file, chosen by extension.
pub fn parse_file<T: DeserializeOwned>(path: &Path) -> SetupResult<T> {
    let text = fs::read_to_string(path)?;
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("ron") => Ok(ron::from_str(&text)?),
        Some("json") => Ok(serde_json::from_str(&text)?),
        _ => Err(SetupError::UnsupportedFormat(path.to_path_buf())),
    }
}
