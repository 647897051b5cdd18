use crate::battle::commands::CommandCatalog;
use crate::battle::encounter::{resolve_turn, Encounter};
use crate::battle::rng::TurnRng;
use crate::config::{RewardTable, SimulationConfig};
use crate::data::GameData;
use crate::errors::{SetupError, SetupResult, SimulationError, SimulationResult};
use crate::observation::{Observation, OBSERVATION_LEN};
use crate::unit::Unit;
use schema::UnitType;

/// Result of one call to [`Simulation::step`].
#[derive(Debug, Clone, PartialEq)]
pub struct StepOutcome {
    pub observation: Observation,
    pub reward: i32,
    pub done: bool,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EpisodePhase {
    Idle,
    Running,
    Finished,
}

/// A battle episode: the player fights random enemies until it falls or has
/// defeated `encounter_quota` of them.
///
/// The simulation owns the player for its whole lifetime and the current
/// enemy through its [`Encounter`]; each new encounter replaces the enemy
/// wholesale. All randomness comes from the one [`TurnRng`] it owns.
#[derive(Debug, Clone)]
pub struct Simulation {
    player: Unit,
    roster: Vec<Unit>,
    encounter: Option<Encounter>,
    encounter_count: u32,
    player_catalog: CommandCatalog,
    enemy_catalog: CommandCatalog,
    rewards: RewardTable,
    encounter_quota: u32,
    rng: TurnRng,
    phase: EpisodePhase,
}

impl Simulation {
    /// Build a simulation for `scenario_code` with the reference rewards and quota.
    pub fn new(data: &GameData, scenario_code: &str, rng: TurnRng) -> SetupResult<Self> {
        let scenario = data.scenario(scenario_code)?;
        let player = Unit::from_record(data.player_for_level(scenario.player_level)?, UnitType::Player)?;
        let roster = data
            .roster(scenario)?
            .into_iter()
            .map(|record| Unit::from_record(record, UnitType::Enemy))
            .collect::<SetupResult<Vec<_>>>()?;

        tracing::info!(
            scenario = scenario_code,
            player_level = scenario.player_level,
            roster = roster.len(),
            "simulation ready"
        );
        Self::from_units(player, roster, rng)
    }

    /// Build a simulation from already constructed units.
    pub fn from_units(player: Unit, roster: Vec<Unit>, rng: TurnRng) -> SetupResult<Self> {
        if player.unit_type != UnitType::Player {
            return Err(SetupError::WrongUnitType {
                name: player.name,
                expected: UnitType::Player,
                found: player.unit_type,
            });
        }
        if roster.is_empty() {
            return Err(SetupError::EmptyRoster("custom".to_string()));
        }
        if let Some(enemy) = roster.iter().find(|unit| unit.unit_type != UnitType::Enemy) {
            return Err(SetupError::WrongUnitType {
                name: enemy.name.clone(),
                expected: UnitType::Enemy,
                found: enemy.unit_type,
            });
        }

        Ok(Self {
            player,
            roster,
            encounter: None,
            encounter_count: 0,
            player_catalog: CommandCatalog::player(),
            enemy_catalog: CommandCatalog::enemy(),
            rewards: RewardTable::default(),
            encounter_quota: 10,
            rng,
            phase: EpisodePhase::Idle,
        })
    }

    /// Build a simulation from a configuration, loading its data source.
    pub fn from_config(config: &SimulationConfig) -> SetupResult<Self> {
        let data = match &config.data_dir {
            Some(dir) => GameData::load_dir(dir)?,
            None => GameData::bundled()?,
        };
        let rng = match config.seed {
            Some(seed) => TurnRng::new_seeded(seed),
            None => TurnRng::new_random(),
        };
        Self::new(&data, &config.scenario, rng)?
            .with_rewards(config.rewards)
            .with_encounter_quota(config.encounter_quota)
    }

    pub fn with_rewards(mut self, rewards: RewardTable) -> Self {
        self.rewards = rewards;
        self
    }

    pub fn with_encounter_quota(mut self, quota: u32) -> SetupResult<Self> {
        if quota == 0 {
            return Err(SetupError::InvalidConfig(
                "encounter_quota must be at least 1".to_string(),
            ));
        }
        self.encounter_quota = quota;
        Ok(self)
    }

    /// Start a new episode and return its first observation.
    pub fn reset(&mut self) -> Observation {
        self.player.recover_all();
        self.encounter_count = 0;
        self.phase = EpisodePhase::Running;
        let encounter = self.roll_encounter();
        let observation = Observation::build(&self.player, &encounter, 0);
        self.encounter = Some(encounter);
        observation
    }

    /// Meet a random enemy from the roster, replacing the current one.
    pub fn encounter(&mut self) -> &Encounter {
        let encounter = self.roll_encounter();
        self.encounter.insert(encounter)
    }

    /// The enemy is fully healed, then starts with up to a quarter of its max
    /// hp already lost. Turn order for the encounter is rolled here.
    fn roll_encounter(&mut self) -> Encounter {
        let pick = self.rng.below(self.roster.len() as u32, "enemy selection") as usize;
        let mut enemy = self.roster[pick].clone();
        enemy.recover_all();
        let wound = self.rng.below(256, "starting wound");
        enemy.hp -= enemy.max_hp * wound / 1024;

        let encounter = Encounter::begin(enemy, &self.player, &mut self.rng);
        tracing::info!(
            enemy = %encounter.enemy.name,
            enemy_hp = encounter.enemy.hp,
            encounter_count = self.encounter_count,
            "encounter started"
        );
        encounter
    }

    /// Advance the episode by one turn with the player choosing `action_index`.
    ///
    /// `action_index` addresses the player's known commands; an index past the
    /// end is a wasted turn, not an error.
    pub fn step(&mut self, action_index: usize) -> SimulationResult<StepOutcome> {
        match self.phase {
            EpisodePhase::Idle => return Err(SimulationError::EpisodeNotRunning),
            EpisodePhase::Finished => return Err(SimulationError::EpisodeFinished),
            EpisodePhase::Running => {}
        }
        let encounter = self
            .encounter
            .as_mut()
            .ok_or(SimulationError::EpisodeNotRunning)?;

        let mut message = resolve_turn(
            &mut self.player,
            encounter,
            action_index,
            &self.player_catalog,
            &self.enemy_catalog,
            &mut self.rng,
        );
        let enemy_name = encounter.enemy.name.clone();
        let enemy_down = encounter.enemy.is_defeated();
        let escaped = encounter.escaped;

        let mut reward = 0;
        let mut done = false;

        // Player defeat is checked first and wins over anything else this turn.
        if self.player.is_defeated() {
            message.push_str("\nYou have died.");
            reward += self.rewards.defeat;
            done = true;
            tracing::info!(encounter_count = self.encounter_count, "player defeated");
        } else if enemy_down || escaped {
            if !escaped {
                message.push_str(&format!("\n\nYou defeated {}!", enemy_name));
                reward += self.rewards.kill;
                self.encounter_count += 1;
            }
            tracing::info!(
                enemy = %enemy_name,
                escaped,
                encounter_count = self.encounter_count,
                "encounter finished"
            );
            self.player.recover_battle_condition();

            if self.encounter_count < self.encounter_quota {
                message.push_str(&format!(
                    "\nBattles remaining: {}",
                    self.encounter_quota - self.encounter_count
                ));
                let next = self.encounter();
                message.push_str(&format!(
                    "\n\nA new {} appeared! Choose a command.",
                    next.enemy.name
                ));
            } else {
                message.push_str(&format!(
                    "\n\nDefeated {} enemies! The simulation is over.",
                    self.encounter_quota
                ));
                reward += self.rewards.clear;
                done = true;
            }
        }

        if done {
            self.phase = EpisodePhase::Finished;
            tracing::info!(encounter_count = self.encounter_count, reward, "episode finished");
        }

        Ok(StepOutcome {
            observation: self.observation()?,
            reward,
            done,
            message,
        })
    }

    /// The current observation vector.
    pub fn observation(&self) -> SimulationResult<Observation> {
        let encounter = self
            .encounter
            .as_ref()
            .ok_or(SimulationError::EpisodeNotRunning)?;
        Ok(Observation::build(&self.player, encounter, self.encounter_count))
    }

    /// A short human-readable status snapshot.
    pub fn render(&self) -> String {
        let mut message = format!(
            "\nYour status\nHP:{}, MP:{}",
            self.player.hp, self.player.mp
        );
        match &self.encounter {
            Some(encounter) => message.push_str(&format!("\nMonster: {}", encounter.enemy.name)),
            None => message.push_str("\nNo monster in sight"),
        }
        message
    }

    /// The player's commands with the action index that selects each.
    pub fn render_command_list(&self) -> String {
        self.player
            .commands()
            .iter()
            .enumerate()
            .map(|(index, &id)| format!("{}:{}, ", self.player_catalog.get(id).name(), index))
            .collect()
    }

    /// Size of the full action catalog.
    pub fn action_count(&self) -> usize {
        self.player_catalog.len()
    }

    pub fn observation_len(&self) -> usize {
        OBSERVATION_LEN
    }

    /// Reseed the random source; identical actions then replay identically.
    pub fn seed(&mut self, seed: u64) {
        self.rng.reseed(seed);
    }

    pub fn player(&self) -> &Unit {
        &self.player
    }

    pub fn enemy(&self) -> Option<&Unit> {
        self.encounter.as_ref().map(|encounter| &encounter.enemy)
    }

    pub fn current_encounter(&self) -> Option<&Encounter> {
        self.encounter.as_ref()
    }

    pub fn encounter_count(&self) -> u32 {
        self.encounter_count
    }

    pub fn encounter_quota(&self) -> u32 {
        self.encounter_quota
    }

    /// Cumulative damage of the current encounter.
    pub fn total_damage(&self) -> i32 {
        self.encounter
            .as_ref()
            .map_or(0, |encounter| encounter.total_damage)
    }

    pub fn is_done(&self) -> bool {
        self.phase == EpisodePhase::Finished
    }
}
