use backend::adapters::users_sea::UserCreate;
use backend::errors::domain::{ConflictKind, DomainError, NotFoundKind};
use backend::repos::users;
use backend_test_support::unique_helpers::unique_email;

use crate::support::build_test_state;
use crate::support::factory::seed_user;

#[tokio::test]
async fn test_empty_table_lists_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = state.db().expect("test state has a database");

    assert!(users::list_users(db).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_create_and_find_user() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = state.db().expect("test state has a database");

    let email = unique_email("leia");
    let created =
        users::create_user(db, UserCreate::new("Leia", email.clone(), "hash").inactive()).await?;

    assert!(created.id > 0);
    assert_eq!(created.email, email);
    assert!(!created.is_active);

    let found = users::find_user_by_id(db, created.id).await?;
    assert_eq!(found, Some(created));
    Ok(())
}

#[tokio::test]
async fn test_list_is_ordered_by_id() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = state.db().expect("test state has a database");

    let first = seed_user(db, "Han").await?;
    let second = seed_user(db, "Chewie").await?;

    let ids: Vec<i64> = users::list_users(db).await?.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
    Ok(())
}

#[tokio::test]
async fn test_duplicate_email_is_conflict() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = state.db().expect("test state has a database");

    let email = unique_email("luke");
    users::create_user(db, UserCreate::new("Luke", email.clone(), "a")).await?;

    let err = users::create_user(db, UserCreate::new("Other", email, "b"))
        .await
        .expect_err("second insert with the same email should fail");
    assert!(
        matches!(err, DomainError::Conflict(ConflictKind::UniqueEmail, _)),
        "got {err:?}"
    );
    Ok(())
}

#[tokio::test]
async fn test_require_missing_user() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = state.db().expect("test state has a database");

    let err = users::require_user(db, 4242)
        .await
        .expect_err("no user 4242 exists");
    assert!(matches!(err, DomainError::NotFound(NotFoundKind::User, _)));
    Ok(())
}
