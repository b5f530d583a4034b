//! DTOs for favorites_sea adapter.

/// Insert payload. Use the constructors; they set exactly one target column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteCreate {
    pub user_id: i64,
    pub character_id: Option<i64>,
    pub planet_id: Option<i64>,
}

impl FavoriteCreate {
    pub fn for_character(user_id: i64, character_id: i64) -> Self {
        Self {
            user_id,
            character_id: Some(character_id),
            planet_id: None,
        }
    }

    pub fn for_planet(user_id: i64, planet_id: i64) -> Self {
        Self {
            user_id,
            character_id: None,
            planet_id: Some(planet_id),
        }
    }
}
