use actix_web::{web, HttpResponse};

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::repos::users::{self, UserView};
use crate::state::app_state::AppState;

async fn list_users(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let users = with_txn(&app_state, |txn| {
        Box::pin(async move { users::list_users(txn).await.map_err(AppError::from) })
    })
    .await?;

    let body: Vec<UserView> = users.into_iter().map(UserView::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(list_users));
}
