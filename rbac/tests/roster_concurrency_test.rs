//! Concurrent role mutation against a shared roster.
//!
//! Run with: `cargo test --test roster_concurrency_test`

use std::sync::Arc;

use cw_common::{Role, UserRef};
use cw_rbac::permissions::DenialReason;
use cw_rbac::roster::{Roster, RosterError};
use uuid::Uuid;

fn admins(n: usize) -> Vec<UserRef> {
    (0..n)
        .map(|_| UserRef::new(Uuid::now_v7(), Role::Admin))
        .collect()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_demotions_keep_an_admin() {
    let users = admins(5);
    let roster = Arc::new(Roster::from_users(users.clone()));

    let mut handles = Vec::new();
    for actor in &users {
        for target in &users {
            if actor.id == target.id {
                continue;
            }
            let roster = Arc::clone(&roster);
            let (actor_id, target_id) = (actor.id, target.id);
            handles.push(tokio::spawn(async move {
                roster
                    .change_role(actor_id, target_id, Role::Caseworker)
                    .await
            }));
        }
    }

    let mut demoted = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(change) if change.previous == Role::Admin => demoted += 1,
            Ok(_) | Err(RosterError::Denied(_)) => {}
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    assert_eq!(roster.admin_count().await, 1);
    assert_eq!(demoted, 4, "every admin but one gets demoted exactly once");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_mutual_demotion_race() {
    for _ in 0..50 {
        let pair = admins(2);
        let (a, b) = (pair[0].id, pair[1].id);
        let roster = Arc::new(Roster::from_users(pair));

        let r1 = Arc::clone(&roster);
        let r2 = Arc::clone(&roster);
        let (first, second) = tokio::join!(
            tokio::spawn(async move { r1.change_role(a, b, Role::ReadOnly).await }),
            tokio::spawn(async move { r2.change_role(b, a, Role::ReadOnly).await }),
        );
        let results = [first.unwrap(), second.unwrap()];

        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
        let denied = results.iter().find_map(|r| r.as_ref().err()).unwrap();
        assert_eq!(denied.denial(), Some(DenialReason::TargetOutranksActor));
        assert_eq!(roster.admin_count().await, 1);
    }
}

#[tokio::test]
async fn test_provisioned_roster_options() {
    let lead = UserRef::new(Uuid::now_v7(), Role::TeamLead);
    let worker = UserRef::new(Uuid::now_v7(), Role::Caseworker);
    let roster = Roster::new();
    roster.insert(lead).await;
    roster.insert(worker).await;

    let options = roster.options_for(lead.id, worker.id).await.unwrap();
    let admin = options.iter().find(|o| o.role == Role::Admin).unwrap();
    assert!(!admin.allowed);
    assert_eq!(admin.reason, Some(DenialReason::PromotionAboveActor));

    let change = roster
        .change_role(lead.id, worker.id, Role::SpecialistReviewer)
        .await
        .unwrap();
    assert_eq!(change.previous, Role::Caseworker);
    assert_eq!(
        roster.role_of(worker.id).await,
        Some(Role::SpecialistReviewer)
    );
}
