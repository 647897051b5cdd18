use serde::{Deserialize, Serialize};

/// A playable scenario: which player level fights which enemies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioRecord {
    pub scenario_code: String,
    pub player_level: u32,
    /// Ids of the enemy records eligible for random encounters.
    #[serde(alias = "normal_enemies")]
    pub enemies: Vec<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_accepts_normal_enemies_alias() {
        let text = r#"{"scenario_code": "default", "player_level": 5, "normal_enemies": [1, 2, 3]}"#;
        let scenario: ScenarioRecord = serde_json::from_str(text).unwrap();
        assert_eq!(scenario.enemies, vec![1, 2, 3]);
        assert_eq!(scenario.player_level, 5);
    }
}
