//! Favorite repository functions and the favorite target type.

use sea_orm::ConnectionTrait;
use serde::{Deserialize, Serialize};

use crate::adapters::favorites_sea::{self as favorites_adapter, FavoriteCreate};
use crate::errors::domain::{DomainError, InfraErrorKind, ValidationKind};

/// What a favorite points at.
///
/// Wire form: `{"type": "character", "id": 5}` / `{"type": "planet", "id": 9}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "id", rename_all = "lowercase")]
pub enum FavoriteTarget {
    Character(i64),
    Planet(i64),
}

impl FavoriteTarget {
    /// Parse the composite `"<prefix><id>"` key. A leading `c` selects a
    /// character, any other prefix a planet; the rest must be a positive id.
    pub fn parse_key(key: &str) -> Result<Self, DomainError> {
        let invalid = || {
            DomainError::validation(
                ValidationKind::InvalidFavoriteKey,
                format!("Invalid favorite key '{key}': expected a prefix followed by a positive id"),
            )
        };

        let mut chars = key.chars();
        let prefix = chars.next().ok_or_else(invalid)?;
        let digits = chars.as_str();

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let id = digits.parse::<i64>().map_err(|_| invalid())?;
        if id <= 0 {
            return Err(invalid());
        }

        Ok(if prefix == 'c' {
            FavoriteTarget::Character(id)
        } else {
            FavoriteTarget::Planet(id)
        })
    }

    pub fn id(self) -> i64 {
        match self {
            FavoriteTarget::Character(id) | FavoriteTarget::Planet(id) => id,
        }
    }
}

/// Favorite domain model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Favorite {
    pub id: i64,
    pub user_id: i64,
    pub target: FavoriteTarget,
}

/// `{id, user_id, character_id, planet_id}`; the unused target is `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FavoriteView {
    pub id: i64,
    pub user_id: i64,
    pub character_id: Option<i64>,
    pub planet_id: Option<i64>,
}

impl From<Favorite> for FavoriteView {
    fn from(f: Favorite) -> Self {
        let (character_id, planet_id) = match f.target {
            FavoriteTarget::Character(id) => (Some(id), None),
            FavoriteTarget::Planet(id) => (None, Some(id)),
        };
        Self {
            id: f.id,
            user_id: f.user_id,
            character_id,
            planet_id,
        }
    }
}

pub async fn create_favorite<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    target: FavoriteTarget,
) -> Result<Favorite, DomainError> {
    let dto = match target {
        FavoriteTarget::Character(id) => FavoriteCreate::for_character(user_id, id),
        FavoriteTarget::Planet(id) => FavoriteCreate::for_planet(user_id, id),
    };
    let row = favorites_adapter::create_favorite(conn, dto).await?;
    Favorite::try_from(row)
}

pub async fn list_favorites_for_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Vec<Favorite>, DomainError> {
    let rows = favorites_adapter::list_favorites_for_user(conn, user_id).await?;
    rows.into_iter().map(Favorite::try_from).collect()
}

impl TryFrom<crate::entities::favorites::Model> for Favorite {
    type Error = DomainError;

    fn try_from(model: crate::entities::favorites::Model) -> Result<Self, Self::Error> {
        let target = match (model.character_id, model.planet_id) {
            (Some(id), None) => FavoriteTarget::Character(id),
            (None, Some(id)) => FavoriteTarget::Planet(id),
            _ => {
                return Err(DomainError::infra(
                    InfraErrorKind::DataCorruption,
                    format!("Favorite {} must reference exactly one target", model.id),
                ))
            }
        };
        Ok(Self {
            id: model.id,
            user_id: model.user_id,
            target,
        })
    }
}
