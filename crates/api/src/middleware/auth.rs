//! JWT-based authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use reporter_core::error::CoreError;
use reporter_core::types::DbId;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Alternate header carrying a bare token, used by older clients.
pub const ACCESS_TOKEN_HEADER: &str = "x-access-token";

/// Authenticated user extracted from the request token.
///
/// The token is read from `Authorization: Bearer <token>`, falling back to
/// the `x-access-token` header.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's internal id (from `claims.sub`).
    pub user_id: DbId,
    /// The user's role name (e.g. `"readonly"`, `"operator"`, `"admin"`).
    pub role: String,
}

fn unauthorized(msg: &str) -> AppError {
    AppError::Core(CoreError::Unauthorized(msg.into()))
}

/// Pull the raw token out of the request headers.
fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    if let Some(value) = headers.get(axum::http::header::AUTHORIZATION) {
        let value = value
            .to_str()
            .map_err(|_| unauthorized("Invalid Authorization header"))?;
        return value.strip_prefix("Bearer ").ok_or_else(|| {
            unauthorized("Invalid Authorization format. Expected: Bearer <token>")
        });
    }

    headers
        .get(ACCESS_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| unauthorized("Missing Authorization header"))
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers)?;

        let claims = validate_token(token, &state.config.jwt).map_err(|e| {
            tracing::debug!(error = %e, "Rejected access token");
            unauthorized("Invalid or expired token")
        })?;

        Ok(AuthUser {
            user_id: claims.sub,
            role: claims.role,
        })
    }
}
