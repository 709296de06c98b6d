//! Role mutation policy.
//!
//! A pure decision function over the fixed role hierarchy, plus the helper
//! that turns it into picker options. Nothing here does I/O or holds state;
//! the roster that calls it owns consistency of the ADMIN headcount.

pub mod error;
pub mod options;
pub mod policy;

pub use cw_common::{rank, Role};
pub use error::PolicyError;
pub use options::{options_for, options_for_user, RoleOption};
pub use policy::{
    admins_left_after, decide, DenialReason, RoleChangeDecision, RoleChangeRequest,
};
