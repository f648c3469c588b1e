use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// Failures of the `/api` proxy. Static file serving cannot fail: unknown
/// paths fall back to the SPA entry point.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("no upstream API configured; set CAR_MARKET_UPSTREAM")]
    NoUpstream,
    #[error("upstream API unreachable: {0}")]
    Unreachable(String),
    #[error("unsupported method {0}")]
    Method(String),
}

impl ResponseError for HostError {
    fn status_code(&self) -> StatusCode {
        match self {
            HostError::NoUpstream => StatusCode::SERVICE_UNAVAILABLE,
            HostError::Unreachable(_) => StatusCode::BAD_GATEWAY,
            HostError::Method(_) => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type("text/plain; charset=utf-8")
            .body(self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses() {
        assert_eq!(HostError::NoUpstream.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            HostError::Unreachable("connection refused".into()).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            HostError::Method("BREW".into()).status_code(),
            StatusCode::METHOD_NOT_ALLOWED
        );
    }
}
