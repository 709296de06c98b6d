//! Shared Types

pub mod role;
pub mod user;

pub use role::{rank, Role};
pub use user::{count_admins, UserRef};
