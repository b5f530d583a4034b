use actix_web::http::StatusCode;
use actix_web::test;
use backend::extractors::validated_json::MAX_BODY_BYTES;
use backend::repos::favorites::{list_favorites_for_user, FavoriteTarget};
use backend_test_support::error_body::assert_error_response;
use serde_json::json;

use crate::common::{object_keys, read_json};
use crate::support::factory::{seed_character, seed_planet, seed_user};
use crate::support::{build_test_state, create_test_app};

#[actix_web::test]
async fn test_character_key_creates_character_favorite() -> Result<(), Box<dyn std::error::Error>>
{
    let state = build_test_state().await?;
    let db = state.db().expect("test state has a database").clone();
    let user = seed_user(&db, "Obi-Wan").await?;
    let character = seed_character(&db, "10").await?;

    let app = create_test_app(state).with_prod_routes().build().await;
    let req = test::TestRequest::post()
        .uri(&format!("/favorites/{}", user.id))
        .set_json(json!({ "uid": format!("c{}", character.id) }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = read_json(resp).await;
    assert_eq!(
        object_keys(&body),
        vec!["character_id", "id", "planet_id", "user_id"]
    );
    assert_eq!(body["user_id"], user.id);
    assert_eq!(body["character_id"], character.id);
    assert!(body["planet_id"].is_null());

    let stored = list_favorites_for_user(&db, user.id).await?;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].target, FavoriteTarget::Character(character.id));
    Ok(())
}

#[actix_web::test]
async fn test_other_prefix_creates_planet_favorite() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = state.db().expect("test state has a database").clone();
    let user = seed_user(&db, "Mon").await?;
    let planet = seed_planet(&db, "9").await?;

    let app = create_test_app(state).with_prod_routes().build().await;
    for key in [format!("p{}", planet.id), format!("x{}", planet.id)] {
        let req = test::TestRequest::post()
            .uri(&format!("/favorites/{}", user.id))
            .set_json(json!({ "uid": &key }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "{key}");

        let body = read_json(resp).await;
        assert_eq!(body["planet_id"], planet.id);
        assert!(body["character_id"].is_null());
    }
    Ok(())
}

#[actix_web::test]
async fn test_explicit_target_form() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = state.db().expect("test state has a database").clone();
    let user = seed_user(&db, "Qui-Gon").await?;
    let planet = seed_planet(&db, "11").await?;

    let app = create_test_app(state).with_prod_routes().build().await;
    let req = test::TestRequest::post()
        .uri(&format!("/favorites/{}", user.id))
        .set_json(json!({ "target": { "type": "planet", "id": planet.id } }))
        .to_request();
    let body = read_json(test::call_service(&app, req).await).await;

    assert_eq!(body["planet_id"], planet.id);
    Ok(())
}

#[actix_web::test]
async fn test_unknown_user_is_404() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = state.db().expect("test state has a database").clone();
    let character = seed_character(&db, "1").await?;

    let app = create_test_app(state).with_prod_routes().build().await;
    let req = test::TestRequest::post()
        .uri("/favorites/4040")
        .set_json(json!({ "uid": format!("c{}", character.id) }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_error_response(resp, "USER_NOT_FOUND", StatusCode::NOT_FOUND, Some("4040")).await;
    Ok(())
}

#[actix_web::test]
async fn test_unknown_target_is_404_and_writes_nothing() -> Result<(), Box<dyn std::error::Error>>
{
    let state = build_test_state().await?;
    let db = state.db().expect("test state has a database").clone();
    let user = seed_user(&db, "Bail").await?;

    let app = create_test_app(state).with_prod_routes().build().await;
    let req = test::TestRequest::post()
        .uri(&format!("/favorites/{}", user.id))
        .set_json(json!({ "uid": "c77" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error_response(resp, "CHARACTER_NOT_FOUND", StatusCode::NOT_FOUND, None).await;

    let req = test::TestRequest::post()
        .uri(&format!("/favorites/{}", user.id))
        .set_json(json!({ "uid": "p77" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error_response(resp, "PLANET_NOT_FOUND", StatusCode::NOT_FOUND, None).await;

    assert!(list_favorites_for_user(&db, user.id).await?.is_empty());
    Ok(())
}

#[actix_web::test]
async fn test_malformed_key_is_400() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = state.db().expect("test state has a database").clone();
    let user = seed_user(&db, "Saw").await?;

    let app = create_test_app(state).with_prod_routes().build().await;
    for key in ["c", "cabc", "", "p0"] {
        let req = test::TestRequest::post()
            .uri(&format!("/favorites/{}", user.id))
            .set_json(json!({ "uid": &key }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_error_response(resp, "INVALID_FAVORITE_KEY", StatusCode::BAD_REQUEST, None).await;
    }
    Ok(())
}

#[actix_web::test]
async fn test_malformed_body_is_400() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/favorites/1")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"uid\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error_response(resp, "BAD_REQUEST", StatusCode::BAD_REQUEST, Some("Invalid JSON")).await;

    let req = test::TestRequest::post()
        .uri("/favorites/1")
        .set_json(json!({ "favorite": "c1" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error_response(resp, "BAD_REQUEST", StatusCode::BAD_REQUEST, None).await;
    Ok(())
}

#[actix_web::test]
async fn test_bad_user_id_is_400() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/favorites/luke")
        .set_json(json!({ "uid": "c1" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error_response(resp, "INVALID_PATH_PARAMETER", StatusCode::BAD_REQUEST, None).await;
    Ok(())
}

#[actix_web::test]
async fn test_oversized_body_is_413_and_writes_nothing() -> Result<(), Box<dyn std::error::Error>>
{
    let state = build_test_state().await?;
    let db = state.db().expect("test state has a database").clone();
    let user = seed_user(&db, "Hera").await?;
    let character = seed_character(&db, "1").await?;

    let app = create_test_app(state).with_prod_routes().build().await;
    let padding = "x".repeat(MAX_BODY_BYTES * 4);
    let req = test::TestRequest::post()
        .uri(&format!("/favorites/{}", user.id))
        .set_json(json!({ "uid": format!("c{}", character.id), "pad": padding }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error_response(
        resp,
        "PAYLOAD_TOO_LARGE",
        StatusCode::PAYLOAD_TOO_LARGE,
        None,
    )
    .await;

    assert!(list_favorites_for_user(&db, user.id).await?.is_empty());
    Ok(())
}

#[actix_web::test]
async fn test_user_zero_is_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/favorites/0")
        .set_json(json!({ "uid": "c1" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error_response(resp, "USER_NOT_FOUND", StatusCode::NOT_FOUND, None).await;
    Ok(())
}
