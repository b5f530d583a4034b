use backend::infra::state::{build_state, StateBuilder};
use backend::state::app_state::AppState;
use backend::AppError;

/// Every connection to `sqlite::memory:` opens a new database, so each
/// state built here starts empty and is private to its test.
const TEST_DB_URL: &str = "sqlite::memory:";

pub fn test_state_builder() -> StateBuilder {
    build_state().with_db_url(TEST_DB_URL)
}

/// Fresh, migrated state.
pub async fn build_test_state() -> Result<AppState, AppError> {
    test_state_builder().build().await
}
