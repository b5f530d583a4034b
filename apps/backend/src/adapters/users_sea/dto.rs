//! DTOs for users_sea adapter.

#[derive(Debug, Clone)]
pub struct UserCreate {
    pub first_name: String,
    pub email: String,
    pub password_hash: String,
    pub is_active: bool,
}

impl UserCreate {
    /// Active user.
    pub fn new(
        first_name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            email: email.into(),
            password_hash: password_hash.into(),
            is_active: true,
        }
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }
}
