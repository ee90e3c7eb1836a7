//! Domain primitives shared by the storage layer and the HTTP server.
//!
//! - [`error`] -- domain-level error enum.
//! - [`roles`] -- role names and the read/write role sets.
//! - [`schema`] -- path-parameter and request-body schemas.
//! - [`types`] -- id and timestamp aliases.

pub mod error;
pub mod notification;
pub mod roles;
pub mod schema;
pub mod types;
