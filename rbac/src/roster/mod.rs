//! In-memory user roster.
//!
//! The roster is the transaction boundary for role mutation: the ADMIN
//! headcount a decision is made on and the write that applies it happen under
//! the same lock, so concurrent demotions cannot empty the ADMIN set.

pub mod error;
pub mod store;

pub use error::RosterError;
pub use store::{RoleChange, Roster};
