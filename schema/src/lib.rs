// RPG Turn Battle Schema - Shared record definitions
// This crate holds the static, serde-derived records consumed by the battle
// engine: unit and scenario definitions, the action catalog identifiers and the
// equipment tables used to derive combat stats.

// Re-export the main types
pub use command_id::*;
pub use equipment::*;
pub use scenario::*;
pub use unit_data::*;

pub mod command_id;
pub mod equipment;
pub mod scenario;
pub mod unit_data;
