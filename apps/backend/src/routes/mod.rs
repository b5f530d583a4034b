use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::errors::ErrorCode;

pub mod favorites;
pub mod health;
pub mod people;
pub mod planets;
pub mod sitemap;
pub mod users;

/// A public route, as listed by `GET /`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Endpoint {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
}

/// Every route `configure` registers. Keep in step with the scopes below.
pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        method: "GET",
        path: "/",
        description: "List available endpoints",
    },
    Endpoint {
        method: "GET",
        path: "/health",
        description: "Service and database health",
    },
    Endpoint {
        method: "GET",
        path: "/user",
        description: "List users (id and email)",
    },
    Endpoint {
        method: "GET",
        path: "/people",
        description: "List characters (id, name, uid)",
    },
    Endpoint {
        method: "GET",
        path: "/people/{id}",
        description: "Character details",
    },
    Endpoint {
        method: "GET",
        path: "/planets",
        description: "List planets (id, name, uid)",
    },
    Endpoint {
        method: "GET",
        path: "/planets/{id}",
        description: "Planet details",
    },
    Endpoint {
        method: "POST",
        path: "/favorites/{user_id}",
        description: "Add a character or planet to a user's favorites",
    },
];

/// Register every route. Used by `main` and by the test app builder.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(sitemap::configure_routes);
    cfg.configure(health::configure_routes);
    cfg.service(web::scope("/user").configure(users::configure_routes));
    cfg.service(web::scope("/people").configure(people::configure_routes));
    cfg.service(web::scope("/planets").configure(planets::configure_routes));
    cfg.service(web::scope("/favorites").configure(favorites::configure_routes));
    cfg.default_service(web::to(route_not_found));
}

async fn route_not_found() -> Result<HttpResponse, AppError> {
    Err(AppError::not_found(
        ErrorCode::NotFound,
        "No such route; see GET / for the route list",
    ))
}
