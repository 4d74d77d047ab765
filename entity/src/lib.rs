//! SeaORM entity models for the student records database.

pub mod prelude;

pub mod student;
