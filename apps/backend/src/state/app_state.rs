use sea_orm::DatabaseConnection;

/// Shared, cloneable application state handed to every worker.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Connection pool. `None` only for states built without a database.
    db: Option<DatabaseConnection>,
    /// Reported by `/health`.
    pub app_version: &'static str,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db: Some(db),
            app_version: env!("CARGO_PKG_VERSION"),
        }
    }

    pub fn without_db() -> Self {
        Self {
            db: None,
            app_version: env!("CARGO_PKG_VERSION"),
        }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }
}
