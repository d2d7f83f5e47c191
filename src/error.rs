//! Error types
//!
//! Not-ready abilities and invalid targets are ordinary outcomes, not errors.
//! What lands here is missing or malformed data.

use crate::policy::AbilitySlot;

/// Ability data the policy needs but could not find.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum PolicyError {
    #[error("actor has no ability in slot {slot:?}")]
    MissingAbility { slot: AbilitySlot },

    #[error("ability {ability} has no data field {field:?}")]
    MissingAbilityData { ability: String, field: String },

    #[error("ability {ability} field {field:?} has no value for level {level}")]
    LevelOutOfRange {
        ability: String,
        field: String,
        level: u32,
    },
}

/// Failure loading settings or a scenario from JSON.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl LoadError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        LoadError::Io {
            path: path.display().to_string(),
            source,
        }
    }
}
