//! SeaORM adapter for characters.

use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, NotSet, QueryOrder, Set};

use crate::entities::characters;

pub mod dto;

pub use dto::CharacterCreate;

pub async fn list_characters<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<characters::Model>, sea_orm::DbErr> {
    characters::Entity::find()
        .order_by_asc(characters::Column::Id)
        .all(conn)
        .await
}

pub async fn find_character_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    character_id: i64,
) -> Result<Option<characters::Model>, sea_orm::DbErr> {
    characters::Entity::find_by_id(character_id).one(conn).await
}

pub async fn create_character<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: CharacterCreate,
) -> Result<characters::Model, sea_orm::DbErr> {
    characters::ActiveModel {
        id: NotSet,
        name: Set(dto.name),
        height: Set(dto.height),
        mass: Set(dto.mass),
        hair_color: Set(dto.hair_color),
        skin_color: Set(dto.skin_color),
        eye_color: Set(dto.eye_color),
        birth_year: Set(dto.birth_year),
        gender: Set(dto.gender),
        uid: Set(dto.uid),
    }
    .insert(conn)
    .await
}
