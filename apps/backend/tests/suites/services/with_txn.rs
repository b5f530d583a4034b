use backend::adapters::planets_sea::PlanetCreate;
use backend::db::txn::with_txn;
use backend::repos::planets;
use backend::state::app_state::AppState;
use backend::{AppError, ErrorCode};

use crate::support::build_test_state;

#[tokio::test]
async fn test_ok_commits() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;

    let created = with_txn(&state, |txn| {
        Box::pin(async move {
            planets::create_planet(txn, PlanetCreate::named("Naboo"))
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    let db = state.db().expect("test state has a database");
    assert_eq!(planets::find_planet_by_id(db, created.id).await?, Some(created));
    Ok(())
}

#[tokio::test]
async fn test_err_rolls_back() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;

    let result: Result<(), AppError> = with_txn(&state, |txn| {
        Box::pin(async move {
            planets::create_planet(txn, PlanetCreate::named("Alderaan"))
                .await
                .map_err(AppError::from)?;
            Err(AppError::bad_request(ErrorCode::BadRequest, "abort"))
        })
    })
    .await;

    let err = result.expect_err("closure error is returned unchanged");
    assert_eq!(err.code(), ErrorCode::BadRequest);

    let db = state.db().expect("test state has a database");
    assert!(planets::list_planets(db).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_without_database_is_unavailable() {
    let state = AppState::without_db();

    let err = with_txn(&state, |_txn| Box::pin(async move { Ok(()) }))
        .await
        .expect_err("no database configured");
    assert_eq!(err.code(), ErrorCode::DbUnavailable);
}
