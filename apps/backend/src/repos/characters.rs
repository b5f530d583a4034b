//! Character repository functions.

use sea_orm::ConnectionTrait;
use serde::Serialize;

use crate::adapters::characters_sea::{self as characters_adapter, CharacterCreate};
use crate::errors::domain::{DomainError, NotFoundKind};

/// Character domain model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    pub id: i64,
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

/// Basic view used by list endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterSummary {
    pub id: i64,
    pub name: Option<String>,
    pub uid: Option<String>,
}

/// Full view. Absent attributes serialize as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterDetail {
    pub id: i64,
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

impl From<Character> for CharacterSummary {
    fn from(c: Character) -> Self {
        Self {
            id: c.id,
            name: c.name,
            uid: c.uid,
        }
    }
}

impl From<Character> for CharacterDetail {
    fn from(c: Character) -> Self {
        Self {
            id: c.id,
            name: c.name,
            height: c.height,
            mass: c.mass,
            hair_color: c.hair_color,
            skin_color: c.skin_color,
            eye_color: c.eye_color,
            birth_year: c.birth_year,
            gender: c.gender,
            uid: c.uid,
        }
    }
}

pub async fn list_characters<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Character>, DomainError> {
    let rows = characters_adapter::list_characters(conn).await?;
    Ok(rows.into_iter().map(Character::from).collect())
}

pub async fn find_character_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    character_id: i64,
) -> Result<Option<Character>, DomainError> {
    let row = characters_adapter::find_character_by_id(conn, character_id).await?;
    Ok(row.map(Character::from))
}

pub async fn require_character<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    character_id: i64,
) -> Result<Character, DomainError> {
    find_character_by_id(conn, character_id)
        .await?
        .ok_or_else(|| {
            DomainError::not_found(
                NotFoundKind::Character,
                format!("Character {character_id} not found"),
            )
        })
}

pub async fn create_character<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: CharacterCreate,
) -> Result<Character, DomainError> {
    let row = characters_adapter::create_character(conn, dto).await?;
    Ok(Character::from(row))
}

impl From<crate::entities::characters::Model> for Character {
    fn from(model: crate::entities::characters::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            height: model.height,
            mass: model.mass,
            hair_color: model.hair_color,
            skin_color: model.skin_color,
            eye_color: model.eye_color,
            birth_year: model.birth_year,
            gender: model.gender,
            uid: model.uid,
        }
    }
}
