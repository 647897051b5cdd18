use schema::UnitType;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building a simulation from data and configuration.
///
/// These are fatal for the setup call that produced them: a malformed record
/// would corrupt derived-stat computation, so nothing is ever defaulted.
#[derive(Error, Debug)]
pub enum SetupError {
    /// No scenario with the requested code exists
    #[error("Scenario not found: {0}")]
    ScenarioNotFound(String),

    /// No player record matches the scenario's player level
    #[error("No player record for level {0}")]
    PlayerLevelNotFound(u32),

    /// The scenario names no enemies at all
    #[error("Scenario '{0}' has an empty enemy roster")]
    EmptyRoster(String),

    /// A roster id has no matching enemy record
    #[error("Scenario '{scenario}' references unknown enemy id {id}")]
    EnemyNotFound { scenario: String, id: u32 },

    /// A record was found in the wrong table
    #[error("Unit '{name}' is a {found} record, expected {expected}")]
    WrongUnitType {
        name: String,
        expected: UnitType,
        found: UnitType,
    },

    /// Record values that cannot describe a living unit
    #[error("Invalid unit record '{name}': {reason}")]
    InvalidUnit { name: String, reason: String },

    /// Configuration values outside their valid range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A data file with an extension no loader handles
    #[error("Unsupported data file: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// None of the accepted file names exist for a data table
    #[error("Missing data file '{name}' in {}", .dir.display())]
    MissingDataFile { dir: PathBuf, name: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("RON parse error: {0}")]
    Ron(#[from] ron::error::SpannedError),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised when the episode API is driven out of order.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// `step` was called before the first `reset`
    #[error("Episode has not been started; call reset() first")]
    EpisodeNotRunning,

    /// `step` was called after the episode reported `done`
    #[error("Episode is finished; call reset() to start a new one")]
    EpisodeFinished,
}

/// Type alias for Results using SetupError
pub type SetupResult<T> = Result<T, SetupError>;

/// Type alias for Results using SimulationError
pub type SimulationResult<T> = Result<T, SimulationError>;
