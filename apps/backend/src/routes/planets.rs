use actix_web::{web, HttpResponse};

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::ResourceId;
use crate::repos::planets::{self, PlanetDetail, PlanetSummary};
use crate::state::app_state::AppState;

async fn list_planets(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let rows = with_txn(&app_state, |txn| {
        Box::pin(async move { planets::list_planets(txn).await.map_err(AppError::from) })
    })
    .await?;

    let body: Vec<PlanetSummary> = rows.into_iter().map(PlanetSummary::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

async fn get_planet(
    ResourceId(planet_id): ResourceId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let planet = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            planets::require_planet(txn, planet_id)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(PlanetDetail::from(planet)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(list_planets))
        .route("/{id}", web::get().to(get_planet));
}
