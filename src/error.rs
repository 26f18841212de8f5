// HTTP API Error Types
use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::handlers::public::auth::LoginResponse;
use crate::store::StoreError;

pub const INVALID_REQUEST: &str = "Invalid request";
pub const FAILED_TO_LOAD_USERS: &str = "Failed to load users";
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Failure outcomes of a login attempt
#[derive(Debug, Error)]
pub enum ApiError {
    // 400 Bad Request
    #[error("Invalid request")]
    InvalidRequest(#[source] serde_json::Error),

    // 401 Unauthorized
    #[error("Invalid credentials")]
    InvalidCredentials,

    // 500 Internal Server Error
    #[error("Failed to load users")]
    StoreUnavailable(#[from] StoreError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::StoreUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message. Never includes the underlying cause.
    pub fn message(&self) -> &'static str {
        match self {
            ApiError::InvalidRequest(_) => INVALID_REQUEST,
            ApiError::InvalidCredentials => INVALID_CREDENTIALS,
            ApiError::StoreUnavailable(_) => FAILED_TO_LOAD_USERS,
        }
    }
}

/// Plain text error body, shaped like a stock HTTP error page
fn plain_text(status: StatusCode, message: &'static str) -> Response {
    let mut response = (status, message).into_response();
    let headers = response.headers_mut();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    response
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            ApiError::InvalidCredentials => {
                (status, Json(LoginResponse::failure(INVALID_CREDENTIALS))).into_response()
            }
            ApiError::InvalidRequest(_) | ApiError::StoreUnavailable(_) => {
                plain_text(status, self.message())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn store_error() -> StoreError {
        StoreError::Io {
            path: PathBuf::from("users.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        }
    }

    #[tokio::test]
    async fn test_invalid_request_is_plain_text() {
        let err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let response = ApiError::InvalidRequest(err).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );
        assert_eq!(response.headers()[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
        assert_eq!(body_string(response).await, "Invalid request");
    }

    #[tokio::test]
    async fn test_store_failure_hides_detail() {
        let response = ApiError::from(store_error()).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_string(response).await, "Failed to load users");
    }

    #[tokio::test]
    async fn test_invalid_credentials_is_json() {
        let response = ApiError::InvalidCredentials.into_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
        assert_eq!(body_string(response).await, r#"{"error":"Invalid credentials"}"#);
    }

    #[test]
    fn test_display_matches_client_message() {
        assert_eq!(ApiError::InvalidCredentials.to_string(), "Invalid credentials");
        assert_eq!(ApiError::from(store_error()).to_string(), "Failed to load users");
    }
}
