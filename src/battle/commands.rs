use crate::battle::calculators::{calculate_attack_damage, roll_outspeed};
use crate::battle::rng::TurnRng;
use crate::unit::Unit;
use schema::{CommandId, UnitType};
use strum::IntoEnumIterator;

/// What one unit's action did.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActionResult {
    pub message: String,
    pub damage: u32,
    pub recover: u32,
    pub escaped: bool,
}

impl ActionResult {
    /// A result with no effect besides its message.
    pub fn message_only(message: String) -> Self {
        Self {
            message,
            ..Self::default()
        }
    }
}

/// A combat action with its static parameters.
///
/// Commands hold no per-battle state; all effects land on the two units passed
/// to [`Command::action`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Attack,
    AttackSpell {
        name: &'static str,
        mp_cost: u32,
        min_damage: u32,
        max_damage: u32,
    },
    /// Heals the caster; battles are strictly one on one.
    RecoverSpell {
        name: &'static str,
        mp_cost: u32,
        min_recover: u32,
        max_recover: u32,
    },
    SealSpell {
        name: &'static str,
        mp_cost: u32,
    },
    SleepSpell {
        name: &'static str,
        mp_cost: u32,
    },
    Escape,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Attack => "Attack",
            Command::Escape => "Run",
            Command::AttackSpell { name, .. }
            | Command::RecoverSpell { name, .. }
            | Command::SealSpell { name, .. }
            | Command::SleepSpell { name, .. } => *name,
        }
    }

    pub fn mp_cost(&self) -> u32 {
        match self {
            Command::Attack | Command::Escape => 0,
            Command::AttackSpell { mp_cost, .. }
            | Command::RecoverSpell { mp_cost, .. }
            | Command::SealSpell { mp_cost, .. }
            | Command::SleepSpell { mp_cost, .. } => *mp_cost,
        }
    }

    /// Performs the command by `actor` against `target`.
    pub fn action(&self, actor: &mut Unit, target: &mut Unit, rng: &mut TurnRng) -> ActionResult {
        match self {
            Command::Attack => attack(actor, target, rng),
            Command::Escape => escape(actor, target, rng),
            Command::AttackSpell {
                name,
                mp_cost,
                min_damage,
                max_damage,
            } => {
                let mut message = cast_message(actor, name);
                if let Some(refusal) = spell_refusal(actor, *mp_cost) {
                    message.push_str(refusal);
                    return ActionResult::message_only(message);
                }
                let damage = rng.between(*min_damage, *max_damage, "attack spell damage");
                actor.mp -= mp_cost;
                target.take_damage(damage);
                message.push_str(&damage_message(target, damage));
                message.push_str(&defeat_message(target));
                ActionResult {
                    message,
                    damage,
                    ..ActionResult::default()
                }
            }
            Command::RecoverSpell {
                name,
                mp_cost,
                min_recover,
                max_recover,
            } => {
                let mut message = cast_message(actor, name);
                if let Some(refusal) = spell_refusal(actor, *mp_cost) {
                    message.push_str(refusal);
                    return ActionResult::message_only(message);
                }
                let rolled = rng.between(*min_recover, *max_recover, "recover spell amount");
                let recover = actor.recover_hp(rolled);
                actor.mp -= mp_cost;
                message.push_str(&format!("{}'s HP recovered by {}!", actor.name, recover));
                ActionResult {
                    message,
                    recover,
                    ..ActionResult::default()
                }
            }
            Command::SealSpell { name, mp_cost } => {
                let mut message = cast_message(actor, name);
                if let Some(refusal) = spell_refusal(actor, *mp_cost) {
                    message.push_str(refusal);
                    return ActionResult::message_only(message);
                }
                target.seal_spell = true;
                actor.mp -= mp_cost;
                message.push_str(&format!("{} can no longer cast spells!", target.name));
                ActionResult::message_only(message)
            }
            Command::SleepSpell { name, mp_cost } => {
                let mut message = cast_message(actor, name);
                if let Some(refusal) = spell_refusal(actor, *mp_cost) {
                    message.push_str(refusal);
                    return ActionResult::message_only(message);
                }
                target.sleep = true;
                target.sleep_turn_count = 0;
                actor.mp -= mp_cost;
                message.push_str(&format!("{} fell asleep!", target.name));
                ActionResult::message_only(message)
            }
        }
    }
}

fn attack(actor: &mut Unit, target: &mut Unit, rng: &mut TurnRng) -> ActionResult {
    let damage = calculate_attack_damage(actor.attack(), target.defense(), rng);
    target.take_damage(damage);
    let mut message = format!("\n{} attacks! ", actor.name);
    message.push_str(&damage_message(target, damage));
    message.push_str(&defeat_message(target));
    ActionResult {
        message,
        damage,
        ..ActionResult::default()
    }
}

fn escape(actor: &mut Unit, target: &mut Unit, rng: &mut TurnRng) -> ActionResult {
    let mut message = format!("\n{} runs away!", actor.name);

    // Monsters always get away; the unit leaves the encounter as if defeated.
    if actor.unit_type == UnitType::Enemy {
        actor.hp = 0;
        return ActionResult {
            message,
            escaped: true,
            ..ActionResult::default()
        };
    }

    let escaped = roll_outspeed(actor.speed, target.speed, rng, "player escape");
    if escaped {
        // The encounter is vacated by zeroing the opponent.
        target.hp = 0;
        message.push_str("\nGot away safely!");
    } else {
        message.push_str("\nBut the way was blocked!");
    }
    ActionResult {
        message,
        escaped,
        ..ActionResult::default()
    }
}

fn cast_message(actor: &Unit, spell: &str) -> String {
    format!("\n{} casts {}! ", actor.name, spell)
}

/// Why a spell fizzles, if it does. A seal takes precedence over missing MP.
fn spell_refusal(caster: &Unit, mp_cost: u32) -> Option<&'static str> {
    if caster.seal_spell {
        Some("But the spell is sealed!")
    } else if caster.mp < mp_cost {
        Some("But there is not enough MP!")
    } else {
        None
    }
}

fn damage_message(damaged: &Unit, damage: u32) -> String {
    match damaged.unit_type {
        UnitType::Player => format!("{} received {} damage!", damaged.name, damage),
        UnitType::Enemy => format!("Dealt {} damage to {}!", damage, damaged.name),
    }
}

fn defeat_message(target: &Unit) -> String {
    if target.is_defeated() {
        format!("\n{} was defeated!", target.name)
    } else {
        String::new()
    }
}

/// Maps every catalog entry to the command a side performs for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandCatalog {
    commands: Vec<Command>,
}

impl CommandCatalog {
    /// Builds a catalog from a per-identifier table.
    pub fn from_fn(table: impl Fn(CommandId) -> Command) -> Self {
        Self {
            commands: CommandId::iter().map(table).collect(),
        }
    }

    /// The commands and parameters available to the player.
    pub fn player() -> Self {
        Self::from_fn(|id| match id {
            CommandId::Attack => Command::Attack,
            CommandId::Escape => Command::Escape,
            CommandId::Cure => Command::RecoverSpell {
                name: "Cure",
                mp_cost: 4,
                min_recover: 18,
                max_recover: 25,
            },
            CommandId::Fire => Command::AttackSpell {
                name: "Fireball",
                mp_cost: 3,
                min_damage: 7,
                max_damage: 12,
            },
            CommandId::MagicSeal => Command::SealSpell {
                name: "Seal",
                mp_cost: 2,
            },
            CommandId::Sleep => Command::SleepSpell {
                name: "Sleep",
                mp_cost: 2,
            },
        })
    }

    /// The commands and parameters available to enemies.
    pub fn enemy() -> Self {
        Self::from_fn(|id| match id {
            CommandId::Attack => Command::Attack,
            CommandId::Escape => Command::Escape,
            CommandId::Cure => Command::RecoverSpell {
                name: "Cure",
                mp_cost: 4,
                min_recover: 10,
                max_recover: 16,
            },
            CommandId::Fire => Command::AttackSpell {
                name: "Fireball",
                mp_cost: 2,
                min_damage: 3,
                max_damage: 10,
            },
            CommandId::MagicSeal => Command::SealSpell {
                name: "Seal",
                mp_cost: 2,
            },
            CommandId::Sleep => Command::SleepSpell {
                name: "Sleep",
                mp_cost: 2,
            },
        })
    }

    pub fn get(&self, id: CommandId) -> &Command {
        &self.commands[id.catalog_index()]
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
