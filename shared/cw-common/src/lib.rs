//! Casework Common Library
//!
//! Shared role and user types used by the authorization core and by every
//! user-management surface that needs a role decision.

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::*;
