use thiserror::Error;

use crate::models::EntityKind;

/// Errors surfaced by the store and the session layer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// Fetch and update report a missing record as `None`; this variant is for
    /// callers that want to treat absence as a failure.
    #[error("{} not found: {id}", .kind.label())]
    NotFound { kind: EntityKind, id: String },

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Email already registered")]
    EmailAlreadyRegistered,

    #[error("Unhandled error: {0}")]
    Unhandled(String),
}

impl Error {
    pub fn not_found(kind: EntityKind, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
