//! Request extractors that form the per-route middleware chain.
//!
//! Axum runs extractors in argument order, so a handler signature such as
//! `(Authorized<WriteAccess>, State, ValidatedPath<P>, ValidatedJson<B>)`
//! authenticates, authorizes, validates the path and then the body before the
//! handler body runs. Every rejection is an [`crate::error::AppError`].
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from a JWT.
//! - [`rbac::Authorized`] -- Requires a role from a fixed allowed-role set.
//! - [`validate::ValidatedPath`] / [`validate::ValidatedJson`] -- Schema validation.

pub mod auth;
pub mod rbac;
pub mod validate;
