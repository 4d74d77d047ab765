//! Request validation rules.
//!
//! Pure functions that check raw request values and convert them into typed domain
//! values. Services call these before touching the store.

pub mod student;
