// handlers/public/auth/login.rs - POST /api/login handler

use std::fmt;

use axum::{body::Bytes, extract::State, Json};
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};

use crate::app::AppState;
use crate::codec;
use crate::error::ApiError;
use crate::store::find_user;

/// Login body. Missing fields are treated as empty strings.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    /// Parse a raw request body. The Content-Type header is not consulted.
    ///
    /// Only the first JSON value is read, a `null` body yields empty
    /// credentials, and keys match in any ASCII case.
    pub fn from_body(body: &[u8]) -> Result<Self, serde_json::Error> {
        let request: Option<LoginRequest> = codec::decode_first(body)?;
        Ok(request.unwrap_or_default())
    }
}

impl<'de> Deserialize<'de> for LoginRequest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LoginRequestVisitor;

        impl<'de> Visitor<'de> for LoginRequestVisitor {
            type Value = LoginRequest;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a login object")
            }

            fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<LoginRequest, A::Error> {
                let mut request = LoginRequest::default();
                codec::read_string_fields(
                    map,
                    &mut [
                        ("username", &mut request.username),
                        ("password", &mut request.password),
                    ],
                )?;
                Ok(request)
            }
        }

        deserializer.deserialize_map(LoginRequestVisitor)
    }
}

/// Login outcome. Exactly one shape is ever serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LoginResponse {
    Success { username: String, level: String },
    Failure { error: String },
}

impl LoginResponse {
    pub fn success(username: impl Into<String>, level: impl Into<String>) -> Self {
        LoginResponse::Success {
            username: username.into(),
            level: level.into(),
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        LoginResponse::Failure { error: error.into() }
    }
}

/// POST /api/login - Check a username/password pair against the users file
///
/// Expected Input:
/// ```json
/// { "username": "alice", "password": "secret" }
/// ```
///
/// Responses:
/// - 200 `{"username": "alice", "level": "admin"}`
/// - 401 `{"error": "Invalid credentials"}`
/// - 400 plain text `Invalid request` (body is not a login object)
/// - 500 plain text `Failed to load users` (users file unreadable or malformed)
///
/// The users file is loaded on every call and scanned in order; the first
/// record whose username and password both match wins.
pub async fn login(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<LoginResponse>, ApiError> {
    let request = LoginRequest::from_body(&body).map_err(|e| {
        tracing::debug!("Rejected login body: {}", e);
        ApiError::InvalidRequest(e)
    })?;

    let users = state.store.load().await.map_err(|e| {
        tracing::error!("{}", e);
        ApiError::from(e)
    })?;

    match find_user(&users, &request.username, &request.password) {
        Some(user) => {
            tracing::info!(username = %user.username, level = %user.level, "Login succeeded");
            Ok(Json(LoginResponse::success(&user.username, &user.level)))
        }
        None => {
            tracing::debug!(username = %request.username, "Login rejected");
            Err(ApiError::InvalidCredentials)
        }
    }
}
