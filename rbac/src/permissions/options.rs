//! Role picker options.
//!
//! Enumerates, for an actor/target pair, which candidate roles can be
//! assigned and why the others are blocked.

use std::cmp::Ordering;

use cw_common::Role;
use serde::Serialize;

use super::error::PolicyError;
use super::policy::{admins_left_after, decide, DenialReason};

/// One candidate role and whether it may be assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoleOption {
    pub role: Role,
    pub allowed: bool,
    pub reason: Option<DenialReason>,
}

/// Evaluate every candidate as the next role for a `target` held by another
/// user.
///
/// Returns one entry per candidate, duplicates included. Ordering: allowed
/// entries first, then descending rank, then canonical name.
pub fn options_for(
    actor: Role,
    target: Role,
    candidates: &[Role],
    admin_count_before_change: u32,
) -> Result<Vec<RoleOption>, PolicyError> {
    options_for_user(actor, target, false, candidates, admin_count_before_change)
}

/// Like [`options_for`], for callers that also know whether actor and target
/// are the same user.
pub fn options_for_user(
    actor: Role,
    target: Role,
    is_self: bool,
    candidates: &[Role],
    admin_count_before_change: u32,
) -> Result<Vec<RoleOption>, PolicyError> {
    let mut options = candidates
        .iter()
        .map(|&role| {
            let left = admins_left_after(target, role, admin_count_before_change)?;
            let decision = decide(actor, target, role, is_self, left);
            Ok(RoleOption {
                role,
                allowed: decision.is_allowed(),
                reason: decision.reason,
            })
        })
        .collect::<Result<Vec<_>, PolicyError>>()?;

    options.sort_by(presentation_order);
    Ok(options)
}

fn presentation_order(a: &RoleOption, b: &RoleOption) -> Ordering {
    b.allowed
        .cmp(&a.allowed)
        .then_with(|| b.role.rank().cmp(&a.role.rank()))
        .then_with(|| a.role.as_str().cmp(b.role.as_str()))
}
