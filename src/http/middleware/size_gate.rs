//! Request size admission gate.
//! Rejects requests whose declared body size exceeds the configured limit.

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, Request, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    Json, Router,
};
use serde::Serialize;
use tracing::warn;

use crate::config::schema::SizeLimitConfig;

/// Structured 413 payload (RFC 7807 problem-details shape).
#[derive(Debug, Serialize)]
pub struct RejectionBody {
    pub title: &'static str,
    pub status: u16,
    #[serde(rename = "type")]
    pub type_uri: &'static str,
}

impl RejectionBody {
    fn request_too_large() -> Self {
        Self {
            title: "Request too large",
            status: StatusCode::PAYLOAD_TOO_LARGE.as_u16(),
            type_uri: "https://tools.ietf.org/html/rfc7231#section-6.5.11",
        }
    }
}

/// Install the gate on a router, ahead of all routes already registered.
/// Returns the router for further chaining.
pub fn install<S>(router: Router<S>, config: Option<SizeLimitConfig>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(middleware::from_fn_with_state(config, size_gate))
}

/// Admission check run before any application handler.
///
/// Decision order: absent config passes through, a zero or negative limit
/// passes through (disabled), an undeclared length passes through (the gate
/// never buffers or measures the body), and only a declared length strictly
/// greater than the limit is rejected.
pub async fn size_gate(
    State(config): State<Option<SizeLimitConfig>>,
    req: Request<Body>,
    next: Next,
) -> Response {
    // 1. No configuration wired in: behave as a no-op link.
    let Some(config) = config else {
        return next.run(req).await;
    };

    // 2. Limit disabled.
    if config.content_length_limit <= 0 {
        return next.run(req).await;
    }

    // 3. Cannot evaluate what the client did not declare (e.g. chunked).
    let Some(declared) = declared_content_length(req.headers()) else {
        return next.run(req).await;
    };

    // 4. Reject oversized requests; the chain ends here.
    if declared > config.content_length_limit as u64 {
        warn!(
            declared_length = declared,
            limit = config.content_length_limit,
            "Declared request body size exceeds configured limit, rejecting"
        );
        return (
            StatusCode::PAYLOAD_TOO_LARGE,
            Json(RejectionBody::request_too_large()),
        )
            .into_response();
    }

    // 5. Within limit: hand off unchanged.
    next.run(req).await
}

/// Declared body size from the `Content-Length` header.
/// Absent or unparseable values count as undeclared.
fn declared_content_length(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(header::CONTENT_LENGTH)?
        .to_str()
        .ok()?
        .parse()
        .ok()
}
