//! SeaORM adapter for planets.

use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, NotSet, QueryOrder, Set};

use crate::entities::planets;

pub mod dto;

pub use dto::PlanetCreate;

pub async fn list_planets<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<planets::Model>, sea_orm::DbErr> {
    planets::Entity::find()
        .order_by_asc(planets::Column::Id)
        .all(conn)
        .await
}

pub async fn find_planet_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    planet_id: i64,
) -> Result<Option<planets::Model>, sea_orm::DbErr> {
    planets::Entity::find_by_id(planet_id).one(conn).await
}

pub async fn create_planet<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: PlanetCreate,
) -> Result<planets::Model, sea_orm::DbErr> {
    planets::ActiveModel {
        id: NotSet,
        name: Set(dto.name),
        diameter: Set(dto.diameter),
        rotation_period: Set(dto.rotation_period),
        orbital_period: Set(dto.orbital_period),
        gravity: Set(dto.gravity),
        population: Set(dto.population),
        climate: Set(dto.climate),
        terrain: Set(dto.terrain),
        surface_water: Set(dto.surface_water),
        uid: Set(dto.uid),
    }
    .insert(conn)
    .await
}
