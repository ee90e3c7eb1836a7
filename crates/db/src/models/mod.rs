//! Domain model structs and DTOs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct matching
//! the database row. Request DTOs live in `reporter_core::schema`.

pub mod item;
pub mod notification;
pub mod project;
pub mod scenario;
