use actix_web::{web, HttpResponse};
use serde::Serialize;

use super::{Endpoint, ENDPOINTS};

#[derive(Debug, Serialize)]
struct SitemapResponse {
    endpoints: &'static [Endpoint],
}

async fn sitemap() -> HttpResponse {
    HttpResponse::Ok().json(SitemapResponse {
        endpoints: ENDPOINTS,
    })
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(sitemap));
}
