use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::error_body::assert_error_response;
use serde_json::json;

use crate::common::{object_keys, read_json};
use crate::support::factory::{seed_character, seed_luke, seed_planet, seed_tatooine, seed_user};
use crate::support::{build_test_state, create_test_app};

#[actix_web::test]
async fn test_empty_lists() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    for path in ["/user", "/people", "/planets"] {
        let resp = test::call_service(&app, test::TestRequest::get().uri(path).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK, "{path}");
        assert_eq!(read_json(resp).await, json!([]), "{path}");
    }
    Ok(())
}

#[actix_web::test]
async fn test_users_expose_only_id_and_email() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = state.db().expect("test state has a database").clone();
    let user = seed_user(&db, "Padme").await?;

    let app = create_test_app(state).with_prod_routes().build().await;
    let resp = test::call_service(&app, test::TestRequest::get().uri("/user").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = read_json(resp).await;
    assert_eq!(body, json!([{ "id": user.id, "email": user.email }]));
    assert!(!body.to_string().contains("argon2-hash"));
    Ok(())
}

#[actix_web::test]
async fn test_people_list_uses_basic_view() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = state.db().expect("test state has a database").clone();
    let luke = seed_luke(&db).await?;
    let other = seed_character(&db, "2").await?;

    let app = create_test_app(state).with_prod_routes().build().await;
    let resp =
        test::call_service(&app, test::TestRequest::get().uri("/people").to_request()).await;
    let body = read_json(resp).await;

    let rows = body.as_array().expect("list body is an array");
    assert_eq!(rows.len(), 2);
    for row in rows {
        assert_eq!(object_keys(row), vec!["id", "name", "uid"]);
    }
    assert_eq!(rows[0]["id"], luke.id);
    assert_eq!(rows[0]["uid"], "1");
    assert_eq!(rows[1]["name"], json!(other.name));
    Ok(())
}

#[actix_web::test]
async fn test_person_detail_has_every_attribute() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = state.db().expect("test state has a database").clone();
    let luke = seed_luke(&db).await?;

    let app = create_test_app(state).with_prod_routes().build().await;
    let uri = format!("/people/{}", luke.id);
    let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = read_json(resp).await;
    assert_eq!(
        body,
        json!({
            "id": luke.id,
            "name": luke.name,
            "height": 172,
            "mass": 77,
            "hair_color": "blond",
            "skin_color": "fair",
            "eye_color": "blue",
            "birth_year": "19BBY",
            "gender": "male",
            "uid": "1",
        })
    );
    Ok(())
}

#[actix_web::test]
async fn test_planet_list_and_detail() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = state.db().expect("test state has a database").clone();
    let tatooine = seed_tatooine(&db).await?;
    seed_planet(&db, "2").await?;

    let app = create_test_app(state).with_prod_routes().build().await;

    let resp =
        test::call_service(&app, test::TestRequest::get().uri("/planets").to_request()).await;
    let list = read_json(resp).await;
    assert_eq!(list.as_array().map(Vec::len), Some(2));
    assert_eq!(object_keys(&list[0]), vec!["id", "name", "uid"]);

    let uri = format!("/planets/{}", tatooine.id);
    let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
    let detail = read_json(resp).await;
    assert_eq!(detail["name"], "Tatooine");
    assert_eq!(detail["population"], 200000);
    assert_eq!(detail["surface_water"], 1);
    assert_eq!(object_keys(&detail).len(), 11);
    Ok(())
}

#[actix_web::test]
async fn test_absent_attributes_serialize_as_null() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = state.db().expect("test state has a database").clone();
    let planet = seed_planet(&db, "7").await?;

    let app = create_test_app(state).with_prod_routes().build().await;
    let uri = format!("/planets/{}", planet.id);
    let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
    let detail = read_json(resp).await;

    assert!(detail["climate"].is_null());
    assert!(detail["diameter"].is_null());
    assert_eq!(detail["uid"], "7");
    Ok(())
}

#[actix_web::test]
async fn test_missing_records_are_404() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let resp =
        test::call_service(&app, test::TestRequest::get().uri("/people/999").to_request()).await;
    assert_error_response(resp, "CHARACTER_NOT_FOUND", StatusCode::NOT_FOUND, Some("999")).await;

    let resp =
        test::call_service(&app, test::TestRequest::get().uri("/planets/999").to_request()).await;
    assert_error_response(resp, "PLANET_NOT_FOUND", StatusCode::NOT_FOUND, Some("999")).await;
    Ok(())
}

#[actix_web::test]
async fn test_zero_id_is_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let resp =
        test::call_service(&app, test::TestRequest::get().uri("/people/0").to_request()).await;
    assert_error_response(resp, "CHARACTER_NOT_FOUND", StatusCode::NOT_FOUND, Some("0")).await;

    let resp =
        test::call_service(&app, test::TestRequest::get().uri("/planets/0").to_request()).await;
    assert_error_response(resp, "PLANET_NOT_FOUND", StatusCode::NOT_FOUND, Some("0")).await;
    Ok(())
}

#[actix_web::test]
async fn test_bad_path_ids_are_400() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    for uri in ["/people/abc", "/people/-1", "/planets/-4", "/planets/1.5"] {
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_error_response(
            resp,
            "INVALID_PATH_PARAMETER",
            StatusCode::BAD_REQUEST,
            None,
        )
        .await;
    }
    Ok(())
}

#[actix_web::test]
async fn test_trailing_slash_is_tolerated() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = state.db().expect("test state has a database").clone();
    let character = seed_character(&db, "1").await?;

    let app = create_test_app(state).with_prod_routes().build().await;

    let resp =
        test::call_service(&app, test::TestRequest::get().uri("/people/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let uri = format!("/people/{}/", character.id);
    let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await["id"], character.id);
    Ok(())
}
