//! Factory methods for creating test data.
//!
//! Factories insert rows into the test database with sensible, unique defaults so tests
//! only spell out the fields they care about.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Create with defaults (active, GPA 0.0, major CS)
//! let student = factory::create_student(&db).await?;
//!
//! // Customize with the builder
//! let student = factory::student::StudentFactory::new(&db)
//!     .status("graduated")
//!     .gpa(3.75)
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod student;

pub use student::{create_student, create_student_with_status};
