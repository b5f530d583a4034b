//! DTOs for characters_sea adapter.

/// Insert payload. Every column besides the id is optional.
#[derive(Debug, Clone, Default)]
pub struct CharacterCreate {
    pub name: Option<String>,
    pub height: Option<i32>,
    pub mass: Option<i32>,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
    pub uid: Option<String>,
}

impl CharacterCreate {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_uid(mut self, uid: impl Into<String>) -> Self {
        self.uid = Some(uid.into());
        self
    }
}
