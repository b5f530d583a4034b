use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::state::app_state::AppState;

/// Builds `AppState` for `main` and for tests.
#[derive(Debug, Default)]
pub struct StateBuilder {
    db_url: Option<String>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Connect to `url` and migrate it during `build`.
    pub fn with_db_url(mut self, url: impl Into<String>) -> Self {
        self.db_url = Some(url.into());
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        match self.db_url {
            Some(url) => {
                let conn = bootstrap_db(&url).await?;
                Ok(AppState::new(conn))
            }
            None => Ok(AppState::without_db()),
        }
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
