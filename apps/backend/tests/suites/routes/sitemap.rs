use actix_web::http::StatusCode;
use actix_web::test;
use backend::routes::ENDPOINTS;
use serde_json::json;

use crate::common::read_json;
use crate::support::factory::{seed_character, seed_planet, seed_user};
use crate::support::{build_test_state, create_test_app};

#[actix_web::test]
async fn test_root_lists_every_endpoint() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = read_json(resp).await;
    let listed = body["endpoints"].as_array().expect("endpoints array");
    assert_eq!(listed.len(), ENDPOINTS.len());

    let paths: Vec<&str> = listed.iter().filter_map(|e| e["path"].as_str()).collect();
    for expected in [
        "/user",
        "/people",
        "/people/{id}",
        "/planets",
        "/planets/{id}",
        "/favorites/{user_id}",
    ] {
        assert!(paths.contains(&expected), "missing {expected}");
    }
    Ok(())
}

#[actix_web::test]
async fn test_every_listed_endpoint_is_routable() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = state.db().expect("test state has a database").clone();
    let user = seed_user(&db, "Wedge").await?;
    let character = seed_character(&db, "1").await?;
    let planet = seed_planet(&db, "1").await?;

    let app = create_test_app(state).with_prod_routes().build().await;

    for endpoint in ENDPOINTS {
        let id = if endpoint.path.starts_with("/planets") {
            planet.id
        } else {
            character.id
        };
        let path = endpoint
            .path
            .replace("{user_id}", &user.id.to_string())
            .replace("{id}", &id.to_string());
        let req = match endpoint.method {
            "GET" => test::TestRequest::get().uri(&path),
            "POST" => test::TestRequest::post()
                .uri(&path)
                .set_json(json!({ "uid": format!("c{}", character.id) })),
            other => panic!("unexpected method {other}"),
        };

        let resp = test::call_service(&app, req.to_request()).await;
        assert_eq!(
            resp.status(),
            StatusCode::OK,
            "{} {} answered {}",
            endpoint.method,
            path,
            resp.status()
        );
    }
    Ok(())
}
