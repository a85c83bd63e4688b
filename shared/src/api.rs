use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Endpoint paths
// ============================================================================

pub const LOGIN_PATH: &str = "/auth/login";

/// Relative path of the per-user events listing.
pub fn user_events_path(user_id: &str) -> String {
    format!("/users/{}/events", user_id)
}

// ============================================================================
// Auth API Types
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub user_id: i64,
    pub name: String,
    pub email: String,
}

// ============================================================================
// Error Types
// ============================================================================

/// Message used when a failing response carries no usable `message` field.
pub const FALLBACK_ERROR_MESSAGE: &str = "Request failed";

/// Error body convention: a JSON object optionally carrying `message`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// The single failure kind surfaced by the API client.
///
/// Network failures, non-2xx statuses, and undecodable bodies all collapse
/// into this one shape; only the human-readable message survives.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Extract the error message from a failing response body.
///
/// Falls back to [`FALLBACK_ERROR_MESSAGE`] when the body is not JSON, not
/// an object, or has no `message` field.
pub fn failure_message(body: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|err| err.message)
        .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_events_path() {
        assert_eq!(user_events_path("42"), "/users/42/events");
    }

    #[test]
    fn test_login_request_body_shape() {
        let request = LoginRequest {
            email: "sam@example.com".to_string(),
            password: "hunter2".to_string(),
        };

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"email": "sam@example.com", "password": "hunter2"})
        );
    }

    #[test]
    fn test_login_response_decodes() {
        let body = r#"{
            "message": "Login successful",
            "user_id": 3,
            "name": "Sam",
            "email": "sam@example.com"
        }"#;
        let response: LoginResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.user_id, 3);
        assert_eq!(response.name, "Sam");
    }

    #[test]
    fn test_failure_message_uses_server_message() {
        assert_eq!(failure_message(r#"{"message": "X"}"#), "X");
    }

    #[test]
    fn test_failure_message_falls_back_without_field() {
        assert_eq!(failure_message("{}"), FALLBACK_ERROR_MESSAGE);
    }

    #[test]
    fn test_failure_message_falls_back_on_garbage() {
        assert_eq!(failure_message(""), FALLBACK_ERROR_MESSAGE);
        assert_eq!(failure_message("<html>502</html>"), FALLBACK_ERROR_MESSAGE);
    }

    #[test]
    fn test_api_error_displays_message() {
        let err = ApiError::new("Login failed: Invalid email or password.");
        assert_eq!(err.to_string(), "Login failed: Invalid email or password.");
    }
}
