//! Casework RBAC
//!
//! Authorization core for role mutation: the policy that decides whether one
//! user may change another user's role, and a roster that enforces it.

pub mod command;
pub mod config;
pub mod observability;
pub mod permissions;
pub mod roster;
