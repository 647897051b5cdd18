use crate::command_id::CommandId;
use crate::equipment::{Armor, Shield, Weapon};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitType {
    Player,
    Enemy,
}

impl fmt::Display for UnitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitType::Player => write!(f, "player"),
            UnitType::Enemy => write!(f, "enemy"),
        }
    }
}

/// Static definition of a combat unit, as read from the data files.
///
/// Derived stats (attack, defense) are not stored here; the engine computes
/// them from `power`/`guard` and the equipment tables when it builds a unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitRecord {
    pub unit_type: UnitType,
    pub id: u32,
    pub name: String,
    /// Player records are selected by level; enemies usually leave this empty.
    #[serde(default)]
    pub level: Option<u32>,
    pub power: u32,
    pub guard: u32,
    pub speed: u32,
    pub max_hp: u32,
    pub max_mp: u32,
    #[serde(default)]
    pub weapon: Weapon,
    #[serde(default)]
    pub armor: Armor,
    #[serde(default)]
    pub shield: Shield,
    /// Known commands, in the order an action index addresses them.
    pub commands: Vec<CommandId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_record_from_ron_uses_equipment_defaults() {
        let text = r#"(
            unit_type: Enemy,
            id: 3,
            name: "Drakee",
            power: 9,
            guard: 6,
            speed: 6,
            max_hp: 6,
            max_mp: 0,
            commands: [attack],
        )"#;
        let record: UnitRecord = ron::from_str(text).unwrap();
        assert_eq!(record.unit_type, UnitType::Enemy);
        assert_eq!(record.level, None);
        assert_eq!(record.weapon, Weapon::None);
        assert_eq!(record.shield, Shield::None);
        assert_eq!(record.commands, vec![CommandId::Attack]);
    }

    #[test]
    fn test_unit_record_from_json_rejects_unknown_command() {
        let text = r#"{
            "unit_type": "Player", "id": 1, "name": "Hero", "level": 1,
            "power": 4, "guard": 4, "speed": 4, "max_hp": 15, "max_mp": 0,
            "commands": ["attack", "teleport"]
        }"#;
        assert!(serde_json::from_str::<UnitRecord>(text).is_err());
    }
}
