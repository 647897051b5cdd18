use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Weapon {
    #[default]
    None,
    Club,
    CopperSword,
    IronAx,
    SteelSword,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Armor {
    #[default]
    None,
    Leather,
    Chain,
    Iron,
    Steel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Shield {
    #[default]
    None,
    Leather,
    Iron,
}

impl Weapon {
    /// Attack bonus added to the wielder's power.
    pub fn attack(self) -> u32 {
        match self {
            Weapon::None => 0,
            Weapon::Club => 4,
            Weapon::CopperSword => 10,
            Weapon::IronAx => 15,
            Weapon::SteelSword => 20,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Weapon::None => "Bare Hands",
            Weapon::Club => "Club",
            Weapon::CopperSword => "Copper Sword",
            Weapon::IronAx => "Iron Axe",
            Weapon::SteelSword => "Steel Sword",
        }
    }
}

impl Armor {
    /// Defense bonus added to the wearer's guard.
    pub fn defense(self) -> u32 {
        match self {
            Armor::None => 0,
            Armor::Leather => 4,
            Armor::Chain => 10,
            Armor::Iron => 15,
            Armor::Steel => 20,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Armor::None => "Nothing",
            Armor::Leather => "Leather Armor",
            Armor::Chain => "Chain Mail",
            Armor::Iron => "Iron Armor",
            Armor::Steel => "Steel Armor",
        }
    }
}

impl Shield {
    /// Defense bonus added to the bearer's guard.
    pub fn defense(self) -> u32 {
        match self {
            Shield::None => 0,
            Shield::Leather => 4,
            Shield::Iron => 10,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Shield::None => "Nothing",
            Shield::Leather => "Leather Shield",
            Shield::Iron => "Iron Shield",
        }
    }
}

impl fmt::Display for Weapon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl fmt::Display for Armor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl fmt::Display for Shield {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equipment_keys_deserialize_from_snake_case() {
        let weapon: Weapon = serde_json::from_str("\"copper_sword\"").unwrap();
        assert_eq!(weapon, Weapon::CopperSword);
        assert_eq!(weapon.attack(), 10);

        let shield: Shield = ron::from_str("iron").unwrap();
        assert_eq!(shield.defense(), 10);

        assert!(serde_json::from_str::<Armor>("\"mithril\"").is_err());
    }

    #[test]
    fn test_defaults_are_bare() {
        assert_eq!(Weapon::default().attack(), 0);
        assert_eq!(Armor::default().defense(), 0);
        assert_eq!(Shield::default().defense(), 0);
    }
}
