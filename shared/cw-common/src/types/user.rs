//! User Types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::role::Role;

/// A roster entry: the user attributes role decisions depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserRef {
    /// User ID.
    pub id: Uuid,
    /// Current role.
    pub role: Role,
}

impl UserRef {
    #[must_use]
    pub const fn new(id: Uuid, role: Role) -> Self {
        Self { id, role }
    }

    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Counts the [`Role::Admin`] entries among `roles`.
///
/// This is the single ADMIN headcount every last-admin check is fed from.
pub fn count_admins<I>(roles: I) -> u32
where
    I: IntoIterator<Item = Role>,
{
    let count = roles.into_iter().filter(|r| r.is_admin()).count();
    u32::try_from(count).unwrap_or(u32::MAX)
}
