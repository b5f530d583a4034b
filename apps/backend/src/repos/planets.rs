//! Planet repository functions.

use sea_orm::ConnectionTrait;
use serde::Serialize;

use crate::adapters::planets_sea::{self as planets_adapter, PlanetCreate};
use crate::errors::domain::{DomainError, NotFoundKind};

/// Planet domain model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Planet {
    pub id: i64,
    pub name: Option<String>,
    pub diameter: Option<i32>,
    pub rotation_period: Option<i32>,
    pub orbital_period: Option<i32>,
    pub gravity: Option<String>,
    pub population: Option<i64>,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub surface_water: Option<i32>,
    pub uid: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanetSummary {
    pub id: i64,
    pub name: Option<String>,
    pub uid: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanetDetail {
    pub id: i64,
    pub name: Option<String>,
    pub diameter: Option<i32>,
    pub rotation_period: Option<i32>,
    pub orbital_period: Option<i32>,
    pub gravity: Option<String>,
    pub population: Option<i64>,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub surface_water: Option<i32>,
    pub uid: Option<String>,
}

impl From<Planet> for PlanetSummary {
    fn from(p: Planet) -> Self {
        Self {
            id: p.id,
            name: p.name,
            uid: p.uid,
        }
    }
}

impl From<Planet> for PlanetDetail {
    fn from(p: Planet) -> Self {
        Self {
            id: p.id,
            name: p.name,
            diameter: p.diameter,
            rotation_period: p.rotation_period,
            orbital_period: p.orbital_period,
            gravity: p.gravity,
            population: p.population,
            climate: p.climate,
            terrain: p.terrain,
            surface_water: p.surface_water,
            uid: p.uid,
        }
    }
}

pub async fn list_planets<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Planet>, DomainError> {
    let rows = planets_adapter::list_planets(conn).await?;
    Ok(rows.into_iter().map(Planet::from).collect())
}

pub async fn find_planet_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    planet_id: i64,
) -> Result<Option<Planet>, DomainError> {
    let row = planets_adapter::find_planet_by_id(conn, planet_id).await?;
    Ok(row.map(Planet::from))
}

pub async fn require_planet<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    planet_id: i64,
) -> Result<Planet, DomainError> {
    find_planet_by_id(conn, planet_id).await?.ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Planet, format!("Planet {planet_id} not found"))
    })
}

pub async fn create_planet<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: PlanetCreate,
) -> Result<Planet, DomainError> {
    let row = planets_adapter::create_planet(conn, dto).await?;
    Ok(Planet::from(row))
}

impl From<crate::entities::planets::Model> for Planet {
    fn from(model: crate::entities::planets::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            diameter: model.diameter,
            rotation_period: model.rotation_period,
            orbital_period: model.orbital_period,
            gravity: model.gravity,
            population: model.population,
            climate: model.climate,
            terrain: model.terrain,
            surface_water: model.surface_water,
            uid: model.uid,
        }
    }
}
