//! HTTP request handlers.
//!
//! Controllers extract path, query and body values, hand them to the service layer and
//! convert the resulting domain models into DTOs. Every handler is annotated for the
//! OpenAPI document.

pub mod json;
pub mod student;
