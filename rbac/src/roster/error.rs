//! Roster error types.

use uuid::Uuid;

use crate::permissions::{DenialReason, PolicyError};

/// Errors from roster role mutation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    /// User is not on the roster.
    #[error("User {0} not found")]
    UnknownUser(Uuid),

    /// The policy denied the change.
    #[error("Role change denied: {0}")]
    Denied(DenialReason),

    /// Roster state is inconsistent with the requested decision.
    #[error(transparent)]
    Policy(#[from] PolicyError),
}

impl RosterError {
    /// The policy denial behind this error, if any.
    #[must_use]
    pub const fn denial(&self) -> Option<DenialReason> {
        match self {
            Self::Denied(reason) => Some(*reason),
            _ => None,
        }
    }
}
