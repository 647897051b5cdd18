//! RPG Turn Battle
//!
//! A one-on-one turn-based combat simulation with a reinforcement-learning
//! style episode interface: `reset`, `step` with an action index, and a fixed
//! length numeric observation. The player fights randomly drawn enemies until
//! it falls or defeats the encounter quota.

pub mod battle;
pub mod config;
pub mod data;
pub mod errors;
pub mod observation;
pub mod simulation;
pub mod unit;

// --- From the `schema` crate ---
pub use schema::{
    Armor, CommandId, ScenarioRecord, Shield, UnitRecord, UnitType, Weapon, CATALOG_LEN,
};

// --- From this crate's modules ---
pub use battle::commands::{ActionResult, Command, CommandCatalog};
pub use battle::encounter::{resolve_turn, Encounter};
pub use battle::rng::TurnRng;
pub use config::{RewardTable, SimulationConfig};
pub use data::GameData;
pub use errors::{SetupError, SetupResult, SimulationError, SimulationResult};
pub use observation::{Observation, OBSERVATION_LEN};
pub use simulation::{Simulation, StepOutcome};
pub use unit::Unit;
