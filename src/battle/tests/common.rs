use crate::battle::encounter::{Encounter, TurnPhase};
use crate::battle::rng::TurnRng;
use crate::unit::Unit;
use schema::{Armor, CommandId, Shield, UnitRecord, UnitType, Weapon};

/// A builder for creating test units with common defaults.
///
/// # Example
/// ```
/// let player = TestUnitBuilder::player()
///     .with_commands(vec![CommandId::Attack, CommandId::Fire])
///     .with_hp(10)
///     .build();
/// ```
pub struct TestUnitBuilder {
    record: UnitRecord,
    hp: Option<u32>,
    mp: Option<u32>,
    seal_spell: bool,
    sleep_turn_count: Option<u32>,
}

impl TestUnitBuilder {
    /// "Hero": attack 20, defense 10, speed 10, 40 hp, 20 mp, every command.
    pub fn player() -> Self {
        Self::from_record(UnitRecord {
            unit_type: UnitType::Player,
            id: 1,
            name: "Hero".to_string(),
            level: Some(5),
            power: 20,
            guard: 10,
            speed: 10,
            max_hp: 40,
            max_mp: 20,
            weapon: Weapon::None,
            armor: Armor::None,
            shield: Shield::None,
            commands: vec![
                CommandId::Attack,
                CommandId::Escape,
                CommandId::Cure,
                CommandId::Fire,
                CommandId::MagicSeal,
                CommandId::Sleep,
            ],
        })
    }

    /// "Slime": attack 12, defense 6, speed 6, 30 hp, 10 mp, attack only.
    pub fn enemy() -> Self {
        Self::from_record(UnitRecord {
            unit_type: UnitType::Enemy,
            id: 1,
            name: "Slime".to_string(),
            level: None,
            power: 12,
            guard: 6,
            speed: 6,
            max_hp: 30,
            max_mp: 10,
            weapon: Weapon::None,
            armor: Armor::None,
            shield: Shield::None,
            commands: vec![CommandId::Attack],
        })
    }

    fn from_record(record: UnitRecord) -> Self {
        Self {
            record,
            hp: None,
            mp: None,
            seal_spell: false,
            sleep_turn_count: None,
        }
    }

    pub fn with_stats(mut self, power: u32, guard: u32, speed: u32) -> Self {
        self.record.power = power;
        self.record.guard = guard;
        self.record.speed = speed;
        self
    }

    pub fn with_max_hp(mut self, max_hp: u32) -> Self {
        self.record.max_hp = max_hp;
        self
    }

    pub fn with_commands(mut self, commands: Vec<CommandId>) -> Self {
        self.record.commands = commands;
        self
    }

    /// Sets the current HP. If not set, HP will be max.
    pub fn with_hp(mut self, hp: u32) -> Self {
        self.hp = Some(hp);
        self
    }

    /// Sets the current MP. If not set, MP will be max.
    pub fn with_mp(mut self, mp: u32) -> Self {
        self.mp = Some(mp);
        self
    }

    pub fn sealed(mut self) -> Self {
        self.seal_spell = true;
        self
    }

    /// Puts the unit to sleep with the given number of checks already slept through.
    pub fn asleep(mut self, sleep_turn_count: u32) -> Self {
        self.sleep_turn_count = Some(sleep_turn_count);
        self
    }

    pub fn build(self) -> Unit {
        let mut unit = match Unit::from_record(&self.record, self.record.unit_type) {
            Ok(unit) => unit,
            Err(err) => panic!("Failed to build test unit {}: {}", self.record.name, err),
        };
        if let Some(hp) = self.hp {
            unit.hp = hp;
        }
        if let Some(mp) = self.mp {
            unit.mp = mp;
        }
        unit.seal_spell = self.seal_spell;
        if let Some(count) = self.sleep_turn_count {
            unit.sleep = true;
            unit.sleep_turn_count = count;
        }
        unit
    }
}

/// An encounter with a fixed turn order, skipping the order roll.
pub fn create_test_encounter(enemy: Unit, player_first: bool) -> Encounter {
    Encounter {
        enemy,
        player_first,
        total_damage: 0,
        escaped: false,
        phase: TurnPhase::NotStarted,
    }
}

/// An RNG that panics on the first draw, for actions that must not consume any.
pub fn no_draws_rng() -> TurnRng {
    TurnRng::new_for_test(vec![])
}

/// Lowest roll for every draw: smallest damage and amounts, first choices.
pub fn low_rolls_rng(draws: usize) -> TurnRng {
    TurnRng::new_for_test(vec![0.0; draws])
}
