//! Schema-validating extractors for path parameters and JSON bodies.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use reporter_core::error::CoreError;
use reporter_core::schema::describe_errors;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

fn invalid(msg: String) -> AppError {
    AppError::Core(CoreError::Validation(msg))
}

/// Path parameters deserialized into `T` and checked with [`Validate`].
///
/// Parameters that do not deserialize (e.g. a non-numeric id) and rule
/// violations both reject with `400 VALIDATION_ERROR`.
#[derive(Debug)]
pub struct ValidatedPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedPath<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| invalid(rejection.body_text()))?;
        value
            .validate()
            .map_err(|errors| invalid(describe_errors(&errors)))?;
        Ok(ValidatedPath(value))
    }
}

/// A JSON body deserialized into `T` and checked with [`Validate`].
///
/// Syntax errors and a missing `Content-Type: application/json` reject with
/// `400 BAD_REQUEST`; bodies that parse but do not fit the schema (wrong
/// types, unknown fields, rule violations) reject with `400 VALIDATION_ERROR`.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| match rejection {
                JsonRejection::JsonDataError(err) => invalid(err.body_text()),
                other => AppError::BadRequest(other.body_text()),
            })?;
        value
            .validate()
            .map_err(|errors| invalid(describe_errors(&errors)))?;
        Ok(ValidatedJson(value))
    }
}
