//! Core error types used across the record slices

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ports::PortError;

/// The kinds of record the core manages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Client,
    Policy,
    Claim,
}

impl EntityKind {
    /// Returns the display name of the entity kind
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Client => "Client",
            EntityKind::Policy => "Policy",
            EntityKind::Claim => "Claim",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error raised by translators and operations components
///
/// `NotFound` covers both the record being operated on and a parent record
/// referenced by a foreign identifier. It is always surfaced to the caller.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("{entity} not found with id: {id}")]
    NotFound {
        entity: EntityKind,
        id: String,
    },

    #[error("Storage error: {0}")]
    Storage(PortError),
}

impl CoreError {
    pub fn not_found(entity: EntityKind, id: impl fmt::Display) -> Self {
        CoreError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// Returns true if this error indicates a record was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, CoreError::NotFound { .. })
    }

    /// Returns the entity kind and identifier of a `NotFound` error
    pub fn missing(&self) -> Option<(EntityKind, &str)> {
        match self {
            CoreError::NotFound { entity, id } => Some((*entity, id.as_str())),
            CoreError::Storage(_) => None,
        }
    }
}

/// A store reporting a vanished row or parent is the same failure the core
/// raises itself, so it is lifted into `CoreError::NotFound`.
impl From<PortError> for CoreError {
    fn from(error: PortError) -> Self {
        match error {
            PortError::NotFound { entity, id } => CoreError::NotFound { entity, id },
            other => CoreError::Storage(other),
        }
    }
}
