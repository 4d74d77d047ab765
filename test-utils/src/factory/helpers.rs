//! Shared helper utilities for factory methods.

/// Counter for generating unique values in tests.
///
/// Ensures each factory-created row gets a distinct student code and email so the
/// unique constraints on the `students` table never collide by accident.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Formats a counter value as a 10-digit student code.
///
/// # Arguments
/// - `id` - Counter value from `next_id()`
///
/// # Returns
/// - `String` - Zero-padded code such as `"6700000042"`
pub fn student_code_for(id: u64) -> String {
    format!("{:010}", 6_700_000_000 + id)
}
