use actix_web::{web, HttpResponse};

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::ResourceId;
use crate::repos::characters::{self, CharacterDetail, CharacterSummary};
use crate::state::app_state::AppState;

async fn list_people(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let people = with_txn(&app_state, |txn| {
        Box::pin(async move {
            characters::list_characters(txn)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    let body: Vec<CharacterSummary> = people.into_iter().map(CharacterSummary::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

async fn get_person(
    ResourceId(character_id): ResourceId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let character = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            characters::require_character(txn, character_id)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(CharacterDetail::from(character)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(list_people))
        .route("/{id}", web::get().to(get_person));
}
