//! Integration tests for teams and membership

mod common;

use common::{seed_user, test_pool};
use fittrack_core::error::AppError;
use fittrack_core::services::team::TeamService;

#[tokio::test]
async fn test_create_makes_creator_member_and_admin() {
    let pool = test_pool().await;
    seed_user(&pool, "alice").await;

    TeamService::create(&pool, "Runners", "alice").await.unwrap();

    assert_eq!(
        TeamService::team_of(&pool, "alice").await.unwrap().as_deref(),
        Some("Runners")
    );
    assert!(TeamService::is_admin(&pool, "Runners", "alice").await.unwrap());

    let members = TeamService::members(&pool, "Runners").await.unwrap();
    assert_eq!(members, vec!["alice".to_string()]);
}

#[tokio::test]
async fn test_duplicate_team_name_is_conflict() {
    let pool = test_pool().await;
    seed_user(&pool, "alice").await;
    seed_user(&pool, "bob").await;

    TeamService::create(&pool, "Runners", "alice").await.unwrap();

    let err = TeamService::create(&pool, "Runners", "bob").await.unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)), "got {err:?}");
}

#[tokio::test]
async fn test_member_cannot_create_second_team() {
    let pool = test_pool().await;
    seed_user(&pool, "alice").await;

    TeamService::create(&pool, "Runners", "alice").await.unwrap();

    let err = TeamService::create(&pool, "Lifters", "alice").await.unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));
}

#[tokio::test]
async fn test_join_and_rejoin() {
    let pool = test_pool().await;
    seed_user(&pool, "alice").await;
    seed_user(&pool, "bob").await;

    TeamService::create(&pool, "Runners", "alice").await.unwrap();
    TeamService::join(&pool, "Runners", "bob").await.unwrap();
    // Joining the same team again is a no-op
    TeamService::join(&pool, "Runners", "bob").await.unwrap();

    let members = TeamService::members(&pool, "Runners").await.unwrap();
    assert_eq!(members, vec!["alice".to_string(), "bob".to_string()]);
}

#[tokio::test]
async fn test_join_while_on_other_team_is_conflict() {
    let pool = test_pool().await;
    seed_user(&pool, "alice").await;
    seed_user(&pool, "bob").await;
    seed_user(&pool, "carol").await;

    TeamService::create(&pool, "Runners", "alice").await.unwrap();
    TeamService::create(&pool, "Lifters", "bob").await.unwrap();
    TeamService::join(&pool, "Runners", "carol").await.unwrap();

    let err = TeamService::join(&pool, "Lifters", "carol").await.unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));
}

#[tokio::test]
async fn test_join_missing_team_or_user_not_found() {
    let pool = test_pool().await;
    seed_user(&pool, "alice").await;
    TeamService::create(&pool, "Runners", "alice").await.unwrap();

    let err = TeamService::join(&pool, "Ghosts", "alice").await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let err = TeamService::join(&pool, "Runners", "nobody").await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_leave_team() {
    let pool = test_pool().await;
    seed_user(&pool, "alice").await;
    seed_user(&pool, "bob").await;

    TeamService::create(&pool, "Runners", "alice").await.unwrap();
    TeamService::join(&pool, "Runners", "bob").await.unwrap();

    TeamService::leave(&pool, "bob").await.unwrap();
    assert!(TeamService::team_of(&pool, "bob").await.unwrap().is_none());

    let err = TeamService::leave(&pool, "bob").await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_only_admin_can_delete() {
    let pool = test_pool().await;
    seed_user(&pool, "alice").await;
    seed_user(&pool, "bob").await;

    TeamService::create(&pool, "Runners", "alice").await.unwrap();
    TeamService::join(&pool, "Runners", "bob").await.unwrap();

    let err = TeamService::delete(&pool, "Runners", "bob").await.unwrap_err();
    assert!(matches!(err, AppError::Forbidden(_)));

    // Failed delete leaves the team intact
    let members = TeamService::members(&pool, "Runners").await.unwrap();
    assert_eq!(members.len(), 2);
}

#[tokio::test]
async fn test_admin_delete_cascades_memberships() {
    let pool = test_pool().await;
    seed_user(&pool, "alice").await;
    seed_user(&pool, "bob").await;

    TeamService::create(&pool, "Runners", "alice").await.unwrap();
    TeamService::join(&pool, "Runners", "bob").await.unwrap();

    TeamService::delete(&pool, "Runners", "alice").await.unwrap();

    assert!(TeamService::team_of(&pool, "alice").await.unwrap().is_none());
    assert!(TeamService::team_of(&pool, "bob").await.unwrap().is_none());

    let err = TeamService::members(&pool, "Runners").await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_remove_member_rules() {
    let pool = test_pool().await;
    seed_user(&pool, "alice").await;
    seed_user(&pool, "bob").await;
    seed_user(&pool, "carol").await;

    TeamService::create(&pool, "Runners", "alice").await.unwrap();
    TeamService::join(&pool, "Runners", "bob").await.unwrap();

    // Non-admin cannot remove
    let err = TeamService::remove_member(&pool, "Runners", "bob", "alice")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Forbidden(_)));

    // Admin cannot remove themselves this way
    let err = TeamService::remove_member(&pool, "Runners", "alice", "alice")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    // Target must be a member
    let err = TeamService::remove_member(&pool, "Runners", "alice", "carol")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    TeamService::remove_member(&pool, "Runners", "alice", "bob")
        .await
        .unwrap();
    assert!(TeamService::team_of(&pool, "bob").await.unwrap().is_none());
}

#[tokio::test]
async fn test_list_includes_zero_member_teams() {
    let pool = test_pool().await;
    seed_user(&pool, "alice").await;
    seed_user(&pool, "bob").await;

    TeamService::create(&pool, "Runners", "alice").await.unwrap();
    TeamService::create(&pool, "Lifters", "bob").await.unwrap();
    TeamService::leave(&pool, "bob").await.unwrap();

    let teams = TeamService::list(&pool).await.unwrap();
    assert_eq!(teams.len(), 2);
    // Ordered by name
    assert_eq!(teams[0].name, "Lifters");
    assert_eq!(teams[0].member_count, 0);
    assert_eq!(teams[1].name, "Runners");
    assert_eq!(teams[1].member_count, 1);
}

#[tokio::test]
async fn test_is_admin_false_cases() {
    let pool = test_pool().await;
    seed_user(&pool, "alice").await;
    seed_user(&pool, "bob").await;

    TeamService::create(&pool, "Runners", "alice").await.unwrap();
    TeamService::join(&pool, "Runners", "bob").await.unwrap();

    assert!(!TeamService::is_admin(&pool, "Runners", "bob").await.unwrap());
    assert!(!TeamService::is_admin(&pool, "Ghosts", "alice").await.unwrap());
}
