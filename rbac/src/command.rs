//! JSON commands accepted by the `role-check` binary.

use cw_common::Role;
use serde::Deserialize;
use serde_json::Value;

use crate::permissions::{decide, options_for};

/// A single policy query.
///
/// Unknown roles and negative counts fail deserialization, so they never
/// reach a decision.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    /// Evaluate one role change.
    Decide {
        actor: Role,
        target: Role,
        next: Role,
        #[serde(default)]
        is_self: bool,
        admins_left_after: u32,
    },
    /// List picker options for an actor/target pair.
    Options {
        actor: Role,
        target: Role,
        #[serde(default = "all_roles")]
        candidates: Vec<Role>,
        admin_count: u32,
    },
}

fn all_roles() -> Vec<Role> {
    Role::all().to_vec()
}

impl Command {
    pub fn parse(input: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn execute(&self) -> anyhow::Result<Value> {
        let value = match self {
            Self::Decide {
                actor,
                target,
                next,
                is_self,
                admins_left_after,
            } => serde_json::to_value(decide(*actor, *target, *next, *is_self, *admins_left_after))?,
            Self::Options {
                actor,
                target,
                candidates,
                admin_count,
            } => serde_json::to_value(options_for(*actor, *target, candidates, *admin_count)?)?,
        };
        Ok(value)
    }
}
