//! Role-based access control (RBAC) extractors.
//!
//! [`Authorized<R>`] wraps [`AuthUser`] and rejects requests whose role is
//! not in the allowed-role set `R`. Authentication always runs first, so a
//! missing token is a 401 even on routes the caller could never access.

use std::marker::PhantomData;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use reporter_core::error::CoreError;
use reporter_core::roles::{self, AllowedRole, READ_ROLES, WRITE_ROLES};

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// A fixed set of roles allowed on a route.
pub trait RoleSet: Send + Sync + 'static {
    const ALLOWED: &'static [AllowedRole];
}

/// `readonly`, `operator` or `admin`.
pub struct ReadAccess;

impl RoleSet for ReadAccess {
    const ALLOWED: &'static [AllowedRole] = READ_ROLES;
}

/// `operator` or `admin`.
pub struct WriteAccess;

impl RoleSet for WriteAccess {
    const ALLOWED: &'static [AllowedRole] = WRITE_ROLES;
}

/// An authenticated user whose role is a member of `R::ALLOWED`.
///
/// ```ignore
/// async fn delete(auth: Authorized<WriteAccess>) -> AppResult<StatusCode> {
///     tracing::info!(user_id = auth.user.user_id, "deleting");
///     Ok(StatusCode::NO_CONTENT)
/// }
/// ```
pub struct Authorized<R: RoleSet> {
    pub user: AuthUser,
    _roles: PhantomData<R>,
}

impl<R: RoleSet> FromRequestParts<AppState> for Authorized<R> {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if !roles::is_allowed(&user.role, R::ALLOWED) {
            tracing::debug!(user_id = user.user_id, role = %user.role, "Role not allowed");
            return Err(AppError::Core(CoreError::Forbidden(format!(
                "One of the following roles is required: {}",
                roles::describe(R::ALLOWED)
            ))));
        }
        Ok(Authorized {
            user,
            _roles: PhantomData,
        })
    }
}
