//! Roster storage and guarded role mutation.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use cw_common::{count_admins, Role, UserRef};
use serde::Serialize;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::error::RosterError;
use crate::permissions::{options_for_user, RoleChangeRequest, RoleOption};

/// Audit record of an applied role change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleChange {
    pub actor_id: Uuid,
    pub target_id: Uuid,
    pub previous: Role,
    pub next: Role,
    pub changed_at: DateTime<Utc>,
}

/// Thread-safe roster of users and their current roles.
#[derive(Debug, Default)]
pub struct Roster {
    users: RwLock<HashMap<Uuid, Role>>,
}

impl Roster {
    /// Create an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a roster from existing users. Later entries win on duplicate IDs.
    pub fn from_users<I>(users: I) -> Self
    where
        I: IntoIterator<Item = UserRef>,
    {
        Self {
            users: RwLock::new(users.into_iter().map(|u| (u.id, u.role)).collect()),
        }
    }

    /// Add or replace a user without a policy check. Used for provisioning.
    pub async fn insert(&self, user: UserRef) -> Option<Role> {
        self.users.write().await.insert(user.id, user.role)
    }

    pub async fn role_of(&self, id: Uuid) -> Option<Role> {
        self.users.read().await.get(&id).copied()
    }

    /// Number of users currently holding ADMIN.
    pub async fn admin_count(&self) -> u32 {
        let users = self.users.read().await;
        count_admins(users.values().copied())
    }

    /// Snapshot of all users, ordered by ID.
    pub async fn users(&self) -> Vec<UserRef> {
        let mut users: Vec<UserRef> = self
            .users
            .read()
            .await
            .iter()
            .map(|(&id, &role)| UserRef::new(id, role))
            .collect();
        users.sort_by_key(|u| u.id);
        users
    }

    /// Role picker options for `actor_id` editing `target_id`, computed from
    /// one consistent snapshot.
    #[tracing::instrument(skip(self))]
    pub async fn options_for(
        &self,
        actor_id: Uuid,
        target_id: Uuid,
    ) -> Result<Vec<RoleOption>, RosterError> {
        let users = self.users.read().await;
        let actor = lookup(&users, actor_id)?;
        let target = lookup(&users, target_id)?;

        Ok(options_for_user(
            actor,
            target,
            actor_id == target_id,
            Role::all(),
            count_admins(users.values().copied()),
        )?)
    }

    /// Apply a role change if the policy allows it.
    ///
    /// The decision and the write happen under one write lock.
    #[tracing::instrument(skip(self))]
    pub async fn change_role(
        &self,
        actor_id: Uuid,
        target_id: Uuid,
        next: Role,
    ) -> Result<RoleChange, RosterError> {
        let mut users = self.users.write().await;
        let actor = lookup(&users, actor_id)?;
        let previous = lookup(&users, target_id)?;

        let request = RoleChangeRequest::derive(
            actor,
            previous,
            next,
            actor_id == target_id,
            count_admins(users.values().copied()),
        )?;

        if let Some(reason) = request.decide().reason {
            tracing::warn!(
                %actor_id,
                %target_id,
                %previous,
                %next,
                reason = reason.code(),
                "Role change denied"
            );
            return Err(RosterError::Denied(reason));
        }

        users.insert(target_id, next);

        let change = RoleChange {
            actor_id,
            target_id,
            previous,
            next,
            changed_at: Utc::now(),
        };

        tracing::info!(
            %actor_id,
            %target_id,
            %previous,
            %next,
            "Role changed"
        );

        Ok(change)
    }
}

fn lookup(users: &HashMap<Uuid, Role>, id: Uuid) -> Result<Role, RosterError> {
    users.get(&id).copied().ok_or(RosterError::UnknownUser(id))
}
