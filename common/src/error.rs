use serde_json::Value;
use thiserror::Error;

/// Failure of a call against the remote car-market API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (network down, CORS,
    /// browser API failure).
    #[error("{0}")]
    Transport(String),
    /// The API answered 404 for the addressed record.
    #[error("the requested record was not found")]
    NotFound,
    /// Any other non-success status, carrying the message the server sent.
    #[error("{message}")]
    Server { status: u16, message: String },
    /// A success response whose body did not match the expected model.
    #[error("unexpected response from the server: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classifies a non-success response from its status and raw body.
    pub fn from_response(status: u16, body: &str) -> Self {
        if status == 404 {
            return ApiError::NotFound;
        }
        let message = server_message(body).unwrap_or_else(|| format!("HTTP {}", status));
        ApiError::Server { status, message }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound)
    }
}

/// Pulls a human readable message out of an error body.
///
/// Accepts plain text, a JSON string, or a JSON object carrying one of the
/// usual `detail`/`title`/`message`/`error` fields. Validation problem bodies
/// (`{"errors": {"Price": ["..."]}}`) are flattened into one line.
fn server_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }

    match serde_json::from_str::<Value>(body) {
        Ok(Value::String(text)) => Some(text).filter(|t| !t.trim().is_empty()),
        Ok(Value::Object(map)) => {
            for key in ["detail", "title", "message", "error"] {
                if let Some(Value::String(text)) = map.get(key) {
                    if !text.trim().is_empty() {
                        return Some(text.clone());
                    }
                }
            }
            match map.get("errors") {
                Some(Value::Object(errors)) => {
                    let joined = errors
                        .values()
                        .filter_map(Value::as_array)
                        .flatten()
                        .filter_map(Value::as_str)
                        .collect::<Vec<_>>()
                        .join("; ");
                    Some(joined).filter(|j| !j.is_empty())
                }
                _ => Some(body.to_string()),
            }
        }
        _ => Some(body.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_wins_over_body() {
        let err = ApiError::from_response(404, "Car 9 missing");
        assert_eq!(err, ApiError::NotFound);
        assert!(err.is_not_found());
        assert!(!ApiError::from_response(410, "gone").is_not_found());
    }

    #[test]
    fn plain_text_body_is_the_message() {
        let err = ApiError::from_response(400, "Price must be positive\n");
        assert_eq!(err.to_string(), "Price must be positive");
    }

    #[test]
    fn problem_details_prefer_detail_then_title() {
        let err = ApiError::from_response(
            500,
            r#"{"title": "Internal error", "detail": "database offline", "status": 500}"#,
        );
        assert_eq!(err.to_string(), "database offline");

        let err = ApiError::from_response(409, r#"{"title": "Conflict"}"#);
        assert_eq!(err.to_string(), "Conflict");
    }

    #[test]
    fn validation_errors_are_flattened() {
        let err = ApiError::from_response(
            400,
            r#"{"type": "x", "errors": {"Company": ["Company is required"], "Price": ["Too low"]}}"#,
        );
        assert_eq!(
            err,
            ApiError::Server {
                status: 400,
                message: "Company is required; Too low".into()
            }
        );
    }

    #[test]
    fn empty_body_falls_back_to_status() {
        assert_eq!(ApiError::from_response(502, "  ").to_string(), "HTTP 502");
        assert_eq!(ApiError::from_response(500, r#""""#).to_string(), "HTTP 500");
    }
}
