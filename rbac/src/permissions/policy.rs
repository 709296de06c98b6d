//! Role change policy.
//!
//! Decides whether an actor may change a target user's role. The rules are
//! evaluated in a fixed order and the first match wins:
//! 1. Nobody changes their own role
//! 2. Targets ranked above the actor are off limits
//! 3. Nobody grants a role ranked above their own
//! 4. Only an ADMIN changes an ADMIN
//! 5. At least one ADMIN must remain
//!
//! Rule 4 is shadowed by rule 2 under the current rank table. It stays as an
//! explicit check so a future table with ADMIN sharing a rank cannot open it.

use std::fmt;

use cw_common::Role;
use serde::{Serialize, Serializer};

use super::error::PolicyError;

/// Why a role change was denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DenialReason {
    /// Actor and target are the same user.
    SelfModification,
    /// Target's current role ranks above the actor's.
    TargetOutranksActor,
    /// Proposed role ranks above the actor's.
    PromotionAboveActor,
    /// Target is an ADMIN and the actor is not.
    AdminOnly,
    /// Change would leave the roster without an ADMIN.
    LastAdmin,
}

impl DenialReason {
    /// Human-readable explanation, suitable for showing to the end user.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::SelfModification => "Own role cannot be changed",
            Self::TargetOutranksActor => "Cannot modify a role ranked higher than your own",
            Self::PromotionAboveActor => "Cannot promote someone above your own level",
            Self::AdminOnly => "ADMIN role can only be changed by an ADMIN",
            Self::LastAdmin => "At least one ADMIN must remain in the system",
        }
    }

    /// Stable identifier for logs and localisation lookups.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::SelfModification => "self_modification",
            Self::TargetOutranksActor => "target_outranks_actor",
            Self::PromotionAboveActor => "promotion_above_actor",
            Self::AdminOnly => "admin_only",
            Self::LastAdmin => "last_admin",
        }
    }

    /// Returns every reason, in rule order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::SelfModification,
            Self::TargetOutranksActor,
            Self::PromotionAboveActor,
            Self::AdminOnly,
            Self::LastAdmin,
        ]
    }
}

impl fmt::Display for DenialReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl Serialize for DenialReason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message())
    }
}

/// Outcome of a role change decision.
///
/// `reason` is `Some` exactly when `allowed` is false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoleChangeDecision {
    pub allowed: bool,
    pub reason: Option<DenialReason>,
}

impl RoleChangeDecision {
    #[must_use]
    pub const fn allow() -> Self {
        Self {
            allowed: true,
            reason: None,
        }
    }

    #[must_use]
    pub const fn deny(reason: DenialReason) -> Self {
        Self {
            allowed: false,
            reason: Some(reason),
        }
    }

    #[must_use]
    pub const fn is_allowed(&self) -> bool {
        self.allowed
    }
}

/// A hypothetical role change, built fresh for each decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleChangeRequest {
    /// Role of the user performing the change.
    pub actor: Role,
    /// Role currently held by the user being changed.
    pub target: Role,
    /// Role being assigned.
    pub next: Role,
    /// Whether actor and target are the same user.
    pub is_self: bool,
    /// ADMIN headcount after the change would be applied.
    pub admins_left_after: u32,
}

impl RoleChangeRequest {
    /// Builds a request from the roster's current ADMIN headcount.
    pub fn derive(
        actor: Role,
        target: Role,
        next: Role,
        is_self: bool,
        admin_count: u32,
    ) -> Result<Self, PolicyError> {
        Ok(Self {
            actor,
            target,
            next,
            is_self,
            admins_left_after: admins_left_after(target, next, admin_count)?,
        })
    }

    #[must_use]
    pub fn decide(&self) -> RoleChangeDecision {
        decide(
            self.actor,
            self.target,
            self.next,
            self.is_self,
            self.admins_left_after,
        )
    }
}

/// ADMIN headcount after changing a `target` user to `next`.
///
/// Demoting an ADMIN removes one from `admin_count`; every other change leaves
/// it unchanged. An ADMIN target with a zero headcount means the caller's
/// roster snapshot is inconsistent.
pub fn admins_left_after(target: Role, next: Role, admin_count: u32) -> Result<u32, PolicyError> {
    if target.is_admin() && !next.is_admin() {
        admin_count
            .checked_sub(1)
            .ok_or(PolicyError::InconsistentAdminCount { target })
    } else {
        Ok(admin_count)
    }
}

/// Decide whether an `actor` may change a `target` role to `next`.
///
/// Never fails: every outcome is a [`RoleChangeDecision`].
pub fn decide(
    actor: Role,
    target: Role,
    next: Role,
    is_self: bool,
    admins_left_after: u32,
) -> RoleChangeDecision {
    let decision = evaluate(actor, target, next, is_self, admins_left_after);

    tracing::debug!(
        actor = %actor,
        target = %target,
        next = %next,
        is_self,
        admins_left_after,
        allowed = decision.allowed,
        reason = decision.reason.map(|r| r.code()),
        "Role change evaluated"
    );

    decision
}

const fn evaluate(
    actor: Role,
    target: Role,
    next: Role,
    is_self: bool,
    admins_left_after: u32,
) -> RoleChangeDecision {
    if is_self {
        return RoleChangeDecision::deny(DenialReason::SelfModification);
    }

    if target.outranks(actor) {
        return RoleChangeDecision::deny(DenialReason::TargetOutranksActor);
    }

    if next.outranks(actor) {
        return RoleChangeDecision::deny(DenialReason::PromotionAboveActor);
    }

    if target.is_admin() && !actor.is_admin() {
        return RoleChangeDecision::deny(DenialReason::AdminOnly);
    }

    if target.is_admin() && !next.is_admin() && admins_left_after < 1 {
        return RoleChangeDecision::deny(DenialReason::LastAdmin);
    }

    RoleChangeDecision::allow()
}

#[cfg(test)]
mod tests {
    use super::*;

    use cw_common::Role::{
        Admin as AD, Caseworker as CW, DataProtectionOfficer as DPO, ReadOnly as RO,
        SpecialistReviewer as SR, TeamLead as TL,
    };

    #[test]
    fn test_admin_promotes_team_lead_to_admin() {
        assert_eq!(decide(AD, TL, AD, false, 3), RoleChangeDecision::allow());
    }

    #[test]
    fn test_team_lead_cannot_demote_admin() {
        let decision = decide(TL, AD, CW, false, 2);
        assert!(!decision.allowed);
        // Rule 2 is checked before the ADMIN-only rule
        assert_eq!(decision.reason, Some(DenialReason::TargetOutranksActor));
    }

    #[test]
    fn test_last_admin_cannot_be_demoted() {
        let decision = decide(AD, AD, CW, false, 0);
        assert_eq!(decision, RoleChangeDecision::deny(DenialReason::LastAdmin));
    }

    #[test]
    fn test_admin_demotion_allowed_when_another_remains() {
        assert!(decide(AD, AD, CW, false, 1).allowed);
    }

    #[test]
    fn test_self_lockout_applies_to_admin() {
        let decision = decide(AD, AD, AD, true, 4);
        assert_eq!(
            decision,
            RoleChangeDecision::deny(DenialReason::SelfModification)
        );
    }

    #[test]
    fn test_cannot_promote_above_own_level() {
        let decision = decide(SR, CW, TL, false, 5);
        assert_eq!(
            decision,
            RoleChangeDecision::deny(DenialReason::PromotionAboveActor)
        );
    }

    #[test]
    fn test_same_rank_peer_modification_allowed() {
        assert!(decide(TL, TL, CW, false, 1).allowed);
        assert!(decide(CW, CW, RO, false, 1).allowed);
    }

    #[test]
    fn test_admin_to_admin_needs_no_remaining_admin() {
        // Not a demotion, so the headcount is irrelevant
        assert!(decide(AD, AD, AD, false, 0).allowed);
    }

    #[test]
    fn test_lowest_role_can_only_shuffle_peers() {
        assert!(decide(DPO, DPO, DPO, false, 1).allowed);
        assert!(!decide(DPO, DPO, RO, false, 1).allowed);
        assert!(!decide(DPO, RO, DPO, false, 1).allowed);
    }

    #[test]
    fn test_reason_present_iff_denied() {
        for &actor in Role::all() {
            for &target in Role::all() {
                for &next in Role::all() {
                    for is_self in [false, true] {
                        for count in 0..3 {
                            let d = decide(actor, target, next, is_self, count);
                            assert_eq!(d.reason.is_none(), d.allowed);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_admins_left_after_derivation() {
        assert_eq!(admins_left_after(AD, CW, 3), Ok(2));
        assert_eq!(admins_left_after(AD, AD, 3), Ok(3));
        assert_eq!(admins_left_after(CW, AD, 3), Ok(3));
        assert_eq!(admins_left_after(CW, TL, 0), Ok(0));
        assert_eq!(
            admins_left_after(AD, RO, 0),
            Err(PolicyError::InconsistentAdminCount { target: AD })
        );
    }

    #[test]
    fn test_request_derive_and_decide() {
        let request = RoleChangeRequest::derive(AD, AD, TL, false, 1).unwrap();
        assert_eq!(request.admins_left_after, 0);
        assert_eq!(
            request.decide(),
            RoleChangeDecision::deny(DenialReason::LastAdmin)
        );
    }

    #[test]
    fn test_reason_messages_and_codes() {
        for reason in DenialReason::all() {
            assert!(!reason.message().is_empty());
            assert!(
                reason
                    .code()
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c == '_'),
                "Code '{}' should be snake_case",
                reason.code()
            );
            assert_eq!(reason.to_string(), reason.message());
        }
    }

    #[test]
    fn test_decision_serializes_reason_as_message() {
        let denied = serde_json::to_value(RoleChangeDecision::deny(DenialReason::LastAdmin)).unwrap();
        assert_eq!(
            denied,
            serde_json::json!({
                "allowed": false,
                "reason": "At least one ADMIN must remain in the system"
            })
        );

        let allowed = serde_json::to_value(RoleChangeDecision::allow()).unwrap();
        assert_eq!(allowed, serde_json::json!({"allowed": true, "reason": null}));
    }
}
