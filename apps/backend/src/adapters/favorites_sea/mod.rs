//! SeaORM adapter for favorites.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::favorites;

pub mod dto;

pub use dto::FavoriteCreate;

pub async fn create_favorite<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: FavoriteCreate,
) -> Result<favorites::Model, sea_orm::DbErr> {
    favorites::ActiveModel {
        id: NotSet,
        user_id: Set(dto.user_id),
        character_id: Set(dto.character_id),
        planet_id: Set(dto.planet_id),
    }
    .insert(conn)
    .await
}

pub async fn list_favorites_for_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Vec<favorites::Model>, sea_orm::DbErr> {
    favorites::Entity::find()
        .filter(favorites::Column::UserId.eq(user_id))
        .order_by_asc(favorites::Column::Id)
        .all(conn)
        .await
}
