//! The numeric state vector handed to a decision-making policy.
//!
//! Layout, in order:
//!
//! | range   | contents                                                            |
//! |---------|---------------------------------------------------------------------|
//! | 0..8    | player max_hp, hp, mp, attack, defense, speed, seal_spell, sleep    |
//! | 8..14   | enemy max_hp, attack, defense, speed, seal_spell, sleep             |
//! | 14      | cumulative damage of the current encounter                          |
//! | 15      | encounters won so far                                               |
//! | 16..22  | player command pattern, catalog order                               |
//! | 22..28  | enemy command pattern, catalog order                                |
//!
//! Enemy hp and mp are deliberately withheld. Policies index into this vector
//! by position, so any change here is a breaking change.

use crate::battle::encounter::Encounter;
use crate::unit::Unit;
use schema::CATALOG_LEN;
use serde::Serialize;

pub const PLAYER_FIELDS: usize = 8;
pub const ENEMY_FIELDS: usize = 6;
pub const PROGRESS_FIELDS: usize = 2;

/// Total length of an observation vector.
pub const OBSERVATION_LEN: usize = PLAYER_FIELDS + ENEMY_FIELDS + PROGRESS_FIELDS + 2 * CATALOG_LEN;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Observation(Vec<i32>);

impl Observation {
    pub fn build(player: &Unit, encounter: &Encounter, encounter_count: u32) -> Self {
        let enemy = &encounter.enemy;
        let mut values = Vec::with_capacity(OBSERVATION_LEN);

        values.extend([
            player.max_hp as i32,
            player.hp as i32,
            player.mp as i32,
            player.attack() as i32,
            player.defense() as i32,
            player.speed as i32,
            player.seal_spell as i32,
            player.sleep as i32,
        ]);
        values.extend([
            enemy.max_hp as i32,
            enemy.attack() as i32,
            enemy.defense() as i32,
            enemy.speed as i32,
            enemy.seal_spell as i32,
            enemy.sleep as i32,
        ]);
        values.push(encounter.total_damage);
        values.push(encounter_count as i32);
        values.extend(player.command_pattern().iter().map(|&known| known as i32));
        values.extend(enemy.command_pattern().iter().map(|&known| known as i32));

        debug_assert_eq!(values.len(), OBSERVATION_LEN);
        Self(values)
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<i32> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::tests::common::{create_test_encounter, TestUnitBuilder};
    use pretty_assertions::assert_eq;
    use schema::CommandId;

    #[test]
    fn test_observation_layout() {
        let player = TestUnitBuilder::player().with_hp(31).with_mp(9).sealed().build();
        let enemy = TestUnitBuilder::enemy()
            .with_commands(vec![CommandId::Attack, CommandId::Sleep])
            .asleep(0)
            .build();
        let mut encounter = create_test_encounter(enemy, true);
        encounter.total_damage = -4;

        let observation = Observation::build(&player, &encounter, 3);

        #[rustfmt::skip]
        let expected = vec![
            40, 31, 9, 20, 10, 10, 1, 0,
            30, 12, 6, 6, 0, 1,
            -4, 3,
            1, 1, 1, 1, 1, 1,
            1, 0, 0, 0, 0, 1,
        ];
        assert_eq!(observation.len(), OBSERVATION_LEN);
        assert_eq!(observation.into_vec(), expected);
    }

    #[test]
    fn test_enemy_hp_and_mp_are_withheld() {
        let player = TestUnitBuilder::player().build();
        let fresh = create_test_encounter(TestUnitBuilder::enemy().build(), true);
        let wounded = create_test_encounter(TestUnitBuilder::enemy().with_hp(1).with_mp(0).build(), true);

        assert_eq!(
            Observation::build(&player, &fresh, 0),
            Observation::build(&player, &wounded, 0)
        );
    }
}
