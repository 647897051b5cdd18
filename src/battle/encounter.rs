use crate::battle::calculators::roll_outspeed;
use crate::battle::commands::{ActionResult, CommandCatalog};
use crate::battle::rng::TurnRng;
use crate::unit::Unit;

/// Progress of the turn currently being resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    NotStarted,
    FirstActed,
    Resolved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Player,
    Enemy,
}

/// One fight between the persistent player and a single enemy.
#[derive(Debug, Clone)]
pub struct Encounter {
    pub enemy: Unit,
    /// Fixed for the whole encounter when it begins.
    pub player_first: bool,
    /// Damage the player dealt, minus what the enemy healed back.
    pub total_damage: i32,
    pub escaped: bool,
    pub phase: TurnPhase,
}

impl Encounter {
    /// Starts an encounter against `enemy`, rolling the turn order once.
    pub fn begin(enemy: Unit, player: &Unit, rng: &mut TurnRng) -> Self {
        let player_first = roll_outspeed(player.speed, enemy.speed, rng, "turn order");
        tracing::debug!(enemy = %enemy.name, player_first, "turn order decided");
        Self {
            enemy,
            player_first,
            total_damage: 0,
            escaped: false,
            phase: TurnPhase::NotStarted,
        }
    }

    /// True once either side is out of the fight.
    pub fn is_over(&self, player: &Unit) -> bool {
        player.is_defeated() || self.enemy.is_defeated() || self.escaped
    }

    fn record(&mut self, side: Side, result: &ActionResult) {
        match side {
            Side::Player => self.total_damage += result.damage as i32,
            // Enemy healing is charged against the player's damage tally.
            Side::Enemy => self.total_damage -= result.recover as i32,
        }
        self.escaped |= result.escaped;
    }
}

/// Resolves one turn of `encounter` with the player choosing `action_index`.
///
/// Both units act in the encounter's fixed order. The second actor is skipped
/// when the first action left it at 0 hp. Returns the turn's messages in
/// resolution order.
pub fn resolve_turn(
    player: &mut Unit,
    encounter: &mut Encounter,
    action_index: usize,
    player_catalog: &CommandCatalog,
    enemy_catalog: &CommandCatalog,
    rng: &mut TurnRng,
) -> String {
    let order = if encounter.player_first {
        [Side::Player, Side::Enemy]
    } else {
        [Side::Enemy, Side::Player]
    };

    encounter.phase = TurnPhase::NotStarted;
    let mut message = String::new();

    for side in order {
        if encounter.phase == TurnPhase::FirstActed {
            let second_down = match side {
                Side::Player => player.is_defeated(),
                Side::Enemy => encounter.enemy.is_defeated(),
            };
            if second_down {
                tracing::debug!(?side, "second action skipped, actor is down");
                break;
            }
        }

        let result = match side {
            Side::Player => act_player(player, &mut encounter.enemy, action_index, player_catalog, rng),
            Side::Enemy => act_enemy(&mut encounter.enemy, player, enemy_catalog, rng),
        };
        encounter.record(side, &result);
        message.push_str(&result.message);

        encounter.phase = match encounter.phase {
            TurnPhase::NotStarted => TurnPhase::FirstActed,
            _ => TurnPhase::Resolved,
        };
    }

    encounter.phase = TurnPhase::Resolved;
    tracing::debug!(
        player_hp = player.hp,
        enemy_hp = encounter.enemy.hp,
        total_damage = encounter.total_damage,
        escaped = encounter.escaped,
        "turn resolved"
    );
    message
}

/// Sleep gate shared by both sides.
///
/// `Err` carries the skip result for a unit that stays asleep, `Ok` the wake-up
/// line (possibly empty) to prefix to its action.
fn check_sleep(unit: &mut Unit, rng: &mut TurnRng) -> Result<String, ActionResult> {
    if !unit.sleep {
        return Ok(String::new());
    }
    if unit.judge_awake(rng) {
        Ok(format!("\n{} woke up!", unit.name))
    } else {
        Err(ActionResult::message_only(format!("\n{} is asleep...", unit.name)))
    }
}

fn act_player(
    player: &mut Unit,
    enemy: &mut Unit,
    action_index: usize,
    catalog: &CommandCatalog,
    rng: &mut TurnRng,
) -> ActionResult {
    let awake_message = match check_sleep(player, rng) {
        Ok(line) => line,
        Err(skipped) => return skipped,
    };

    // An untrained policy may pick a command the player has not learned yet.
    // The wake-up line is dropped when the turn is wasted anyway.
    let Some(&id) = player.commands().get(action_index) else {
        return ActionResult::message_only(format!("\n{} is watching carefully.", player.name));
    };

    let mut result = catalog.get(id).action(player, enemy, rng);
    result.message.insert_str(0, &awake_message);
    result
}

fn act_enemy(
    enemy: &mut Unit,
    player: &mut Unit,
    catalog: &CommandCatalog,
    rng: &mut TurnRng,
) -> ActionResult {
    let awake_message = match check_sleep(enemy, rng) {
        Ok(line) => line,
        Err(skipped) => return skipped,
    };

    let choice = rng.below(enemy.commands().len() as u32, "enemy command") as usize;
    let id = enemy.commands()[choice];
    let mut result = catalog.get(id).action(enemy, player, rng);
    result.message.insert_str(0, &awake_message);
    result
}
