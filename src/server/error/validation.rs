use thiserror::Error;

/// Client-correctable input or business-rule failures.
///
/// Every variant maps to 400 Bad Request with its display message as the response
/// body. The messages are part of the API contract and are shown to staff verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// One of `student_code`, `first_name`, `last_name`, `email`, `major` is missing or empty.
    #[error("All fields are required")]
    MissingFields,

    /// Student code is not exactly 10 decimal digits.
    #[error("Invalid student code format (must be 10 digits)")]
    InvalidStudentCode,

    /// Email does not have a `local@domain.tld` shape.
    #[error("Invalid email format")]
    InvalidEmail,

    /// Major is not one of the offered programs.
    #[error("Invalid major. Must be one of: CS, SE, IT, CE, DS")]
    InvalidMajor,

    /// GPA is absent or outside `[0.0, 4.0]`.
    #[error("GPA must be between 0.0 and 4.0")]
    InvalidGpa,

    /// Status is not one of the lifecycle states.
    #[error("Invalid status. Must be one of: active, graduated, suspended, withdrawn")]
    InvalidStatus,

    /// Path id is not a positive integer.
    #[error("Invalid student ID")]
    InvalidId,

    /// Withdrawn is a terminal status.
    #[error("Cannot change status of withdrawn student")]
    WithdrawnStatusLocked,

    /// Active students must change status before they can be deleted.
    #[error("Cannot delete active student. Change status first.")]
    ActiveStudentDelete,
}
