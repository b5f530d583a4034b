use actix_web::http::StatusCode;
use actix_web::test;
use backend::state::app_state::AppState;
use uuid::Uuid;

use crate::support::create_test_app;

fn request_id(resp: &actix_web::dev::ServiceResponse) -> String {
    resp.headers()
        .get("x-request-id")
        .expect("x-request-id header should be present")
        .to_str()
        .expect("x-request-id should be ASCII")
        .to_string()
}

#[actix_web::test]
async fn test_every_response_carries_a_request_id() {
    let app = create_test_app(AppState::without_db())
        .with_prod_routes()
        .build()
        .await;

    let ok = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(ok.status(), StatusCode::OK);
    let first = request_id(&ok);
    assert!(Uuid::parse_str(&first).is_ok(), "not a uuid: {first}");

    let missing =
        test::call_service(&app, test::TestRequest::get().uri("/nowhere").to_request()).await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    let second = request_id(&missing);

    assert_ne!(first, second);
}

#[actix_web::test]
async fn test_error_trace_id_matches_request_id() {
    let app = create_test_app(AppState::without_db())
        .with_prod_routes()
        .build()
        .await;

    let resp =
        test::call_service(&app, test::TestRequest::get().uri("/people/abc").to_request()).await;
    let header_request_id = request_id(&resp);
    let trace_id = resp
        .headers()
        .get("x-trace-id")
        .and_then(|v| v.to_str().ok())
        .expect("error responses carry x-trace-id");

    assert_eq!(header_request_id, trace_id);
}
