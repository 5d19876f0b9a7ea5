//! Token endpoints
//!
//! Encode an identity into a sealed token and decode a presented token
//! back into the identity it carries. Every codec rejection maps to the
//! same client-facing response: the distinct failure kinds (bad
//! signature, expired, malformed) stay server-side, logged via tracing,
//! so callers cannot probe which gate rejected a forged token.

use axum::{extract::State, routing::post, Router};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::{validate_user, Identity, Role, TokenError};

/// Create the tokens router
pub fn create_tokens_router() -> Router<AppState> {
    Router::new()
        .route("/encode", post(encode))
        .route("/decode", post(decode))
}

/// Role and access tier attached to a user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityData {
    pub role: Role,
    pub access_level: i64,
}

/// Encode request
#[derive(Debug, Deserialize)]
pub struct EncodeRequest {
    pub user: String,
    pub data: IdentityData,
    /// Optional duration spec such as "10 days"; the configured default
    /// applies when absent
    #[serde(default)]
    pub expiration: Option<String>,
}

/// Encode response
#[derive(Debug, Serialize)]
pub struct EncodeResponse {
    pub token: String,
}

/// Decode request
#[derive(Debug, Deserialize)]
pub struct DecodeRequest {
    pub token: String,
}

/// Decode response
#[derive(Debug, Serialize)]
pub struct DecodeResponse {
    pub user: String,
    pub data: IdentityData,
}

impl DecodeResponse {
    fn from_identity(identity: Identity) -> Self {
        Self {
            user: identity.user,
            data: IdentityData {
                role: identity.role,
                access_level: identity.access_level,
            },
        }
    }
}

/// Encode an identity into a token
///
/// POST /tokens/encode
pub async fn encode(
    State(state): State<AppState>,
    Json(request): Json<EncodeRequest>,
) -> Result<Json<EncodeResponse>, ApiError> {
    validate_user(&request.user).map_err(|e| ApiError::bad_request(e.to_string()))?;

    let identity = Identity::new(request.user, request.data.role, request.data.access_level);
    let token = state
        .codec
        .encode(&identity, request.expiration.as_deref())
        .map_err(reject)?;

    Ok(Json(EncodeResponse { token }))
}

/// Decode a token back into the identity it carries
///
/// POST /tokens/decode
pub async fn decode(
    State(state): State<AppState>,
    Json(request): Json<DecodeRequest>,
) -> Result<Json<DecodeResponse>, ApiError> {
    let identity = state.codec.decode(&request.token).map_err(reject)?;

    Ok(Json(DecodeResponse::from_identity(identity)))
}

/// Collapse every codec rejection into one uniform client response.
///
/// The typed kind is logged but never leaves the process boundary.
fn reject(error: TokenError) -> ApiError {
    warn!(%error, "token operation rejected");
    ApiError::bad_request("Invalid token data")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn test_state() -> AppState {
        let mut config = AppConfig::default();
        config.token.secret = "s3cr3t".to_string();
        AppState::from_config(&config).unwrap()
    }

    fn encode_request(expiration: Option<&str>) -> EncodeRequest {
        EncodeRequest {
            user: "john_doe".to_string(),
            data: IdentityData {
                role: Role::Admin,
                access_level: 5,
            },
            expiration: expiration.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_encode_then_decode() {
        let state = test_state();

        let encoded = encode(State(state.clone()), Json(encode_request(Some("10 days"))))
            .await
            .unwrap();

        let decoded = decode(
            State(state),
            Json(DecodeRequest {
                token: encoded.0.token.clone(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(decoded.0.user, "john_doe");
        assert_eq!(decoded.0.data.role, Role::Admin);
        assert_eq!(decoded.0.data.access_level, 5);
    }

    #[tokio::test]
    async fn test_encode_rejects_invalid_user() {
        let state = test_state();
        let mut request = encode_request(None);
        request.user = String::new();

        let result = encode(State(state), Json(request)).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_decode_rejects_garbage_uniformly() {
        let state = test_state();

        for token in ["", "not-a-token", "a.b.c", "a.b.c.d"] {
            let result = decode(
                State(state.clone()),
                Json(DecodeRequest {
                    token: token.to_string(),
                }),
            )
            .await;

            let error = result.err().expect("garbage token must be rejected");
            assert_eq!(error.status, axum::http::StatusCode::BAD_REQUEST);
            // Identical message regardless of which gate failed.
            assert_eq!(error.response.error.message, "Invalid token data");
        }
    }

    #[tokio::test]
    async fn test_decode_rejects_expired_uniformly() {
        let state = test_state();

        let encoded = encode(State(state.clone()), Json(encode_request(Some("-10s"))))
            .await
            .unwrap();

        let result = decode(
            State(state),
            Json(DecodeRequest {
                token: encoded.0.token.clone(),
            }),
        )
        .await;

        let error = result.err().expect("expired token must be rejected");
        assert_eq!(error.response.error.message, "Invalid token data");
    }

    #[test]
    fn test_request_shapes() {
        let request: EncodeRequest = serde_json::from_str(
            r#"{"user":"john_doe","data":{"role":"admin","access_level":5}}"#,
        )
        .unwrap();

        assert_eq!(request.user, "john_doe");
        assert_eq!(request.data.role, Role::Admin);
        assert_eq!(request.expiration, None);
    }

    #[test]
    fn test_response_shapes() {
        let identity = Identity::new("john_doe", Role::Admin, 5);
        let response = DecodeResponse::from_identity(identity);
        let json = serde_json::to_string(&response).unwrap();

        assert_eq!(
            json,
            r#"{"user":"john_doe","data":{"role":"admin","access_level":5}}"#
        );
    }
}
