use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumCount, EnumIter, EnumString};

/// Identifier of an entry in the action catalog.
///
/// Declaration order is the catalog order. It fixes the layout of every unit's
/// command pattern and therefore the tail of the observation vector, so new
/// variants must only ever be appended.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumCount,
    EnumString,
    AsRefStr,
    Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CommandId {
    Attack,
    Escape,
    Cure,
    Fire,
    MagicSeal,
    Sleep,
}

impl CommandId {
    /// Position of this identifier in the catalog.
    pub fn catalog_index(self) -> usize {
        self as usize
    }
}

/// Number of entries in the full action catalog.
pub const CATALOG_LEN: usize = CommandId::COUNT;
