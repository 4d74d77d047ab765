//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them to seed
//! in-memory stores, to test conversions, or as default values.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let student = fixture::student::entity();
//!
//! let withdrawn = fixture::student::entity_builder()
//!     .id(7)
//!     .status("withdrawn")
//!     .build();
//! ```

pub mod student;

pub use student::{entity as student_entity, entity_builder as student_entity_builder};
