//! Favorite creation: the only multi-step write in the catalogue.

use sea_orm::ConnectionTrait;
use tracing::{debug, info};

use crate::errors::domain::DomainError;
use crate::repos::favorites::{self, Favorite, FavoriteTarget};
use crate::repos::{characters, planets, users};

/// Record `target` as a favorite of `user_id`.
///
/// The user and the target must both exist; either missing is a `NotFound`
/// naming which one. Call inside a transaction so the checks and the insert
/// see the same snapshot.
pub async fn add_favorite<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    target: FavoriteTarget,
) -> Result<Favorite, DomainError> {
    users::require_user(conn, user_id).await?;

    match target {
        FavoriteTarget::Character(id) => {
            characters::require_character(conn, id).await?;
        }
        FavoriteTarget::Planet(id) => {
            planets::require_planet(conn, id).await?;
        }
    }
    debug!(user_id, ?target, "favorite target resolved");

    let favorite = favorites::create_favorite(conn, user_id, target).await?;
    info!(
        favorite_id = favorite.id,
        user_id,
        target_id = target.id(),
        "favorite added"
    );
    Ok(favorite)
}

/// Composite-key variant used by the `{"uid": "c5"}` request form.
pub async fn add_favorite_by_key<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    key: &str,
) -> Result<Favorite, DomainError> {
    let target = FavoriteTarget::parse_key(key)?;
    add_favorite(conn, user_id, target).await
}
