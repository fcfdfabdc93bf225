//! Cross-origin policy
//!
//! Requests without an `Origin` header, or from an allow-listed origin, go
//! through and get CORS headers from `tower_http`. Any other origin is
//! refused with 403 and an empty body before routing.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::observability::Logger;

/// Allow-list of browser origins
#[derive(Debug, Clone)]
pub struct OriginPolicy {
    allowed: Vec<HeaderValue>,
}

impl OriginPolicy {
    /// Builds the policy; entries that are not valid header values are skipped
    pub fn new(origins: &[String]) -> Self {
        let allowed = origins
            .iter()
            .filter_map(|s| HeaderValue::from_str(s).ok())
            .collect();
        Self { allowed }
    }

    /// True for a missing origin or one on the list
    pub fn is_allowed(&self, origin: Option<&HeaderValue>) -> bool {
        match origin {
            None => true,
            Some(origin) => self.allowed.contains(origin),
        }
    }

    /// CORS response headers for allowed origins
    pub fn layer(&self) -> CorsLayer {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(self.allowed.clone()))
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::PATCH,
                Method::DELETE,
            ])
            .allow_headers([header::CONTENT_TYPE])
    }
}

/// Middleware refusing requests from origins outside the policy
pub async fn enforce_origin(
    State(policy): State<Arc<OriginPolicy>>,
    request: Request,
    next: Next,
) -> Response {
    let origin = request.headers().get(header::ORIGIN);
    if policy.is_allowed(origin) {
        return next.run(request).await;
    }

    let origin = origin
        .and_then(|v| v.to_str().ok())
        .unwrap_or("<non-ascii>")
        .to_string();
    Logger::warn(
        "CORS_REJECTED",
        &[
            ("method", request.method().as_str()),
            ("origin", origin.as_str()),
            ("path", request.uri().path()),
        ],
    );
    StatusCode::FORBIDDEN.into_response()
}
