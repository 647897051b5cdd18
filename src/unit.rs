use crate::battle::rng::TurnRng;
use crate::errors::{SetupError, SetupResult};
use schema::{Armor, CommandId, Shield, UnitRecord, UnitType, Weapon, CATALOG_LEN};
use serde::Serialize;
use std::collections::HashSet;

/// A combat participant.
///
/// `attack` and `defense` are derived once from base stats and equipment and
/// are only readable afterwards. `hp` and `mp` stay within `0..=max`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Unit {
    pub unit_type: UnitType,
    pub id: u32,
    pub name: String,
    pub level: Option<u32>,

    pub power: u32,
    pub guard: u32,
    pub speed: u32,
    pub max_hp: u32,
    pub max_mp: u32,
    pub weapon: Weapon,
    pub armor: Armor,
    pub shield: Shield,

    attack: u32,
    defense: u32,

    pub hp: u32,
    pub mp: u32,
    pub seal_spell: bool,
    pub sleep: bool,
    pub sleep_turn_count: u32,

    commands: Vec<CommandId>,
    command_pattern: [bool; CATALOG_LEN],
}

impl Unit {
    /// Builds a unit from its static record, checking it describes a usable
    /// combatant of the expected side.
    pub fn from_record(record: &UnitRecord, expected: UnitType) -> SetupResult<Self> {
        if record.unit_type != expected {
            return Err(SetupError::WrongUnitType {
                name: record.name.clone(),
                expected,
                found: record.unit_type,
            });
        }
        if record.max_hp == 0 {
            return Err(SetupError::InvalidUnit {
                name: record.name.clone(),
                reason: "max_hp must be greater than zero".to_string(),
            });
        }
        if record.commands.is_empty() {
            return Err(SetupError::InvalidUnit {
                name: record.name.clone(),
                reason: "unit knows no commands".to_string(),
            });
        }
        let mut seen = HashSet::new();
        if let Some(duplicate) = record.commands.iter().find(|id| !seen.insert(**id)) {
            return Err(SetupError::InvalidUnit {
                name: record.name.clone(),
                reason: format!("command '{}' listed more than once", duplicate),
            });
        }

        let mut command_pattern = [false; CATALOG_LEN];
        for id in &record.commands {
            command_pattern[id.catalog_index()] = true;
        }

        Ok(Self {
            unit_type: record.unit_type,
            id: record.id,
            name: record.name.clone(),
            level: record.level,
            power: record.power,
            guard: record.guard,
            speed: record.speed,
            max_hp: record.max_hp,
            max_mp: record.max_mp,
            weapon: record.weapon,
            armor: record.armor,
            shield: record.shield,
            attack: record.power + record.weapon.attack(),
            defense: record.guard + record.armor.defense() + record.shield.defense(),
            hp: record.max_hp,
            mp: record.max_mp,
            seal_spell: false,
            sleep: false,
            sleep_turn_count: 0,
            commands: record.commands.clone(),
            command_pattern,
        })
    }

    pub fn attack(&self) -> u32 {
        self.attack
    }

    pub fn defense(&self) -> u32 {
        self.defense
    }

    pub fn is_player(&self) -> bool {
        self.unit_type == UnitType::Player
    }

    pub fn is_defeated(&self) -> bool {
        self.hp == 0
    }

    /// Known commands in the order an action index addresses them.
    pub fn commands(&self) -> &[CommandId] {
        &self.commands
    }

    /// Which catalog entries this unit knows, in catalog order.
    pub fn command_pattern(&self) -> &[bool; CATALOG_LEN] {
        &self.command_pattern
    }

    /// Heals up to `amount`, never past `max_hp`. Returns the amount applied.
    pub fn recover_hp(&mut self, amount: u32) -> u32 {
        let applied = amount.min(self.max_hp - self.hp);
        self.hp += applied;
        applied
    }

    /// Removes `amount` hp, stopping at zero.
    pub fn take_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }

    /// Clears the conditions that only last for one encounter.
    pub fn recover_battle_condition(&mut self) {
        self.seal_spell = false;
    }

    pub fn recover_all(&mut self) {
        self.hp = self.max_hp;
        self.mp = self.max_mp;
        self.seal_spell = false;
        self.sleep = false;
        self.sleep_turn_count = 0;
    }

    /// Wake check for a sleeping unit; returns whether it is awake afterwards.
    ///
    /// A unit always sleeps through the first check after falling asleep. From
    /// then on it wakes with probability 1/3 per check.
    pub fn judge_awake(&mut self, rng: &mut TurnRng) -> bool {
        if !self.sleep {
            return true;
        }
        if self.sleep_turn_count == 0 {
            self.sleep_turn_count += 1;
        } else if rng.below(3, "wake check") == 0 {
            self.sleep = false;
            self.sleep_turn_count = 0;
        }
        !self.sleep
    }
}
