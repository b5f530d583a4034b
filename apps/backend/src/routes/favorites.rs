use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::{UserId, ValidatedJson};
use crate::repos::favorites::{FavoriteTarget, FavoriteView};
use crate::services::favorites as favorites_service;
use crate::state::app_state::AppState;

/// Body of `POST /favorites/{user_id}`.
///
/// Either the composite key `{"uid": "c5"}` or an explicit
/// `{"target": {"type": "planet", "id": 9}}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum AddFavoriteRequest {
    Explicit { target: FavoriteTarget },
    Keyed { uid: String },
}

async fn add_favorite(
    UserId(user_id): UserId,
    app_state: web::Data<AppState>,
    body: ValidatedJson<AddFavoriteRequest>,
) -> Result<HttpResponse, AppError> {
    let request = body.into_inner();

    let favorite = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            let created = match request {
                AddFavoriteRequest::Explicit { target } => {
                    favorites_service::add_favorite(txn, user_id, target).await
                }
                AddFavoriteRequest::Keyed { uid } => {
                    favorites_service::add_favorite_by_key(txn, user_id, &uid).await
                }
            };
            created.map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(FavoriteView::from(favorite)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/{user_id}", web::post().to(add_favorite));
}
