//! Policy error types.

use cw_common::Role;

/// Inputs that must never reach a role decision.
///
/// A denial is not an error; see [`super::RoleChangeDecision`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PolicyError {
    /// ADMIN headcount is zero while the target itself holds a role that
    /// counts towards it.
    #[error("Inconsistent admin count: target holds {target} but admin count is 0")]
    InconsistentAdminCount { target: Role },
}
