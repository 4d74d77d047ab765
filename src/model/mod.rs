//! API data transfer objects shared by the HTTP boundary.
//!
//! DTOs describe the JSON shapes on the wire and derive `ToSchema` for the OpenAPI
//! document. Server-side domain models convert to and from these at the controller
//! boundary.

pub mod api;
pub mod student;
