//! Assertions for the JSON error contract.
//!
//! Every failing response carries
//! `{"message", "status_code", "code", "trace_id"}` and an `x-trace-id`
//! header equal to the body's `trace_id`.

use actix_web::dev::ServiceResponse;
use actix_web::http::header::HeaderMap;
use actix_web::http::StatusCode;
use serde::Deserialize;

/// Wire shape of an error body, decoded without backend types.
#[derive(Debug, Deserialize)]
pub struct ErrorBodyLike {
    pub message: String,
    pub status_code: u16,
    pub code: String,
    pub trace_id: String,
}

/// Check status, header/body trace id parity, the code and optionally a
/// substring of the message. Returns the decoded body for further checks.
pub fn assert_error_parts(
    status: StatusCode,
    headers: &HeaderMap,
    body: &[u8],
    expected_code: &str,
    expected_status: StatusCode,
    expected_message_contains: Option<&str>,
) -> ErrorBodyLike {
    assert_eq!(status, expected_status, "unexpected HTTP status");

    let parsed: ErrorBodyLike = serde_json::from_slice(body).unwrap_or_else(|e| {
        panic!(
            "error body is not the expected JSON shape ({e}): {}",
            String::from_utf8_lossy(body)
        )
    });

    let header_trace_id = headers
        .get("x-trace-id")
        .expect("x-trace-id header should be present")
        .to_str()
        .expect("x-trace-id header should be ASCII");

    assert_eq!(
        parsed.trace_id, header_trace_id,
        "trace_id in body should match x-trace-id header"
    );
    assert!(!parsed.trace_id.is_empty(), "trace_id should not be empty");
    assert_eq!(parsed.code, expected_code);
    assert_eq!(parsed.status_code, expected_status.as_u16());

    if let Some(fragment) = expected_message_contains {
        assert!(
            parsed.message.contains(fragment),
            "expected message to contain '{fragment}', got '{}'",
            parsed.message
        );
    }

    parsed
}

/// [`assert_error_parts`] for a response produced by `actix_web::test`.
pub async fn assert_error_response(
    resp: ServiceResponse,
    expected_code: &str,
    expected_status: StatusCode,
    expected_message_contains: Option<&str>,
) -> ErrorBodyLike {
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = actix_web::test::read_body(resp).await;

    assert_error_parts(
        status,
        &headers,
        &body,
        expected_code,
        expected_status,
        expected_message_contains,
    )
}
