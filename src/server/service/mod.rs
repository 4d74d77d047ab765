//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer and
//! are responsible for:
//!
//! - **Validation**: Running the validator over raw request values
//! - **Business Rules**: Enforcing the student status lifecycle
//! - **Aggregation**: Computing listing statistics
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod student;
