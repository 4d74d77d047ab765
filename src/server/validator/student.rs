//! Field and business-rule validation for student requests.
//!
//! Each function either returns the normalized value or the `ValidationError` that
//! the API reports verbatim. None of them trim or otherwise rewrite their input.

use std::{str::FromStr, sync::LazyLock};

use regex::Regex;

use crate::server::{
    error::validation::ValidationError,
    model::student::{Major, StudentData, StudentStatus},
};

static STUDENT_CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("student code pattern is valid"));

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Checks that every identity field is present and non-empty.
///
/// Whitespace-only values count as present.
///
/// # Returns
/// - `Ok(())` - All five fields carry a value
/// - `Err(ValidationError::MissingFields)` - At least one field is absent or `""`
pub fn validate_student_data(data: &StudentData) -> Result<(), ValidationError> {
    let fields = [
        &data.student_code,
        &data.first_name,
        &data.last_name,
        &data.email,
        &data.major,
    ];

    if fields
        .iter()
        .all(|field| field.as_deref().is_some_and(|value| !value.is_empty()))
    {
        Ok(())
    } else {
        Err(ValidationError::MissingFields)
    }
}

/// Accepts exactly 10 ASCII decimal digits.
pub fn validate_student_code(code: &str) -> Result<(), ValidationError> {
    if STUDENT_CODE_PATTERN.is_match(code) {
        Ok(())
    } else {
        Err(ValidationError::InvalidStudentCode)
    }
}

/// Accepts `local@domain.tld` where no part contains whitespace or `@`.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if EMAIL_PATTERN.is_match(email) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

pub fn validate_major(major: &str) -> Result<Major, ValidationError> {
    Major::from_str(major).map_err(|_| ValidationError::InvalidMajor)
}

/// Accepts a GPA within `[0.0, 4.0]`, boundaries included.
///
/// An absent value or NaN is rejected with the same error as an out-of-range one.
pub fn validate_gpa(gpa: Option<f64>) -> Result<f64, ValidationError> {
    match gpa {
        Some(gpa) if (0.0..=4.0).contains(&gpa) => Ok(gpa),
        _ => Err(ValidationError::InvalidGpa),
    }
}

pub fn validate_status(status: &str) -> Result<StudentStatus, ValidationError> {
    StudentStatus::from_str(status).map_err(|_| ValidationError::InvalidStatus)
}

/// Parses a path segment into a positive record id.
///
/// Surrounding whitespace is ignored; anything else that is not a decimal integer
/// greater than zero is rejected.
pub fn validate_id(id: &str) -> Result<i32, ValidationError> {
    match id.trim().parse::<i32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ValidationError::InvalidId),
    }
}

/// Validates an optional major filter; `None` stays `None`.
pub fn validate_major_if_provided(major: Option<&str>) -> Result<Option<Major>, ValidationError> {
    major.map(validate_major).transpose()
}

/// Validates an optional status filter; `None` stays `None`.
pub fn validate_status_if_provided(
    status: Option<&str>,
) -> Result<Option<StudentStatus>, ValidationError> {
    status.map(validate_status).transpose()
}
