//! Assertions on RFC 7807 error bodies.

use actix_web::http::header::HeaderMap;
use actix_web::http::StatusCode;
use serde::{Deserialize, Serialize};

/// Mirror of the backend's problem body, decoded from the wire.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProblemDetailsLike {
    #[serde(rename = "type")]
    pub type_: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub code: String,
    pub trace_id: String,
}

pub const PROBLEM_TYPE_PREFIX: &str = "https://ludo.local/errors/";

/// Checks status, content type, `x-trace-id` parity and the error code, and
/// returns the decoded body for further assertions.
///
/// `expected_detail_contains` is matched as a substring when given.
pub fn assert_problem_details_from_parts(
    status: StatusCode,
    headers: &HeaderMap,
    body: &[u8],
    expected_code: &str,
    expected_status: StatusCode,
    expected_detail_contains: Option<&str>,
) -> ProblemDetailsLike {
    assert_eq!(status, expected_status, "unexpected status");

    let content_type = headers
        .get(actix_web::http::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(
        content_type.starts_with("application/problem+json"),
        "Content-Type must be application/problem+json (got {content_type})"
    );

    let body_str = std::str::from_utf8(body).expect("body should be valid UTF-8");
    let problem: ProblemDetailsLike = serde_json::from_str(body_str)
        .unwrap_or_else(|_| panic!("body should be problem details, got: {body_str}"));

    let trace_header = headers
        .get("x-trace-id")
        .and_then(|v| v.to_str().ok())
        .expect("x-trace-id header should be present");
    assert!(!trace_header.is_empty(), "x-trace-id should not be empty");
    assert_eq!(
        problem.trace_id, trace_header,
        "trace_id in body should match x-trace-id header"
    );

    assert_eq!(problem.code, expected_code);
    assert_eq!(problem.status, expected_status.as_u16());
    assert_eq!(problem.type_, format!("{PROBLEM_TYPE_PREFIX}{expected_code}"));

    if let Some(expected) = expected_detail_contains {
        assert!(
            problem.detail.contains(expected),
            "expected detail to contain '{expected}', got '{}'",
            problem.detail
        );
    }

    problem
}
