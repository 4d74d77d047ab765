//! Student fixtures for creating in-memory test data.

use chrono::{TimeZone, Utc};
use entity::student;

/// Default test student code.
pub const DEFAULT_STUDENT_CODE: &str = "6754321004";

/// Default test first name.
pub const DEFAULT_FIRST_NAME: &str = "Somchai";

/// Default test last name.
pub const DEFAULT_LAST_NAME: &str = "Jaidee";

/// Default test email.
pub const DEFAULT_EMAIL: &str = "somchai.j@example.com";

/// Default test major.
pub const DEFAULT_MAJOR: &str = "CS";

/// Default test status.
pub const DEFAULT_STATUS: &str = "active";

/// Creates a student entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - student_code: `"6754321004"`
/// - first_name / last_name: `"Somchai"` / `"Jaidee"`
/// - email: `"somchai.j@example.com"`
/// - major: `"CS"`, gpa: `0.0`, status: `"active"`
/// - created_at: `2026-01-05T00:00:00Z`
pub fn entity() -> student::Model {
    entity_builder().build()
}

/// Creates a student entity builder for customization.
pub fn entity_builder() -> StudentEntityBuilder {
    StudentEntityBuilder::default()
}

/// Builder for creating customized student entity models.
pub struct StudentEntityBuilder {
    id: i32,
    student_code: String,
    first_name: String,
    last_name: String,
    email: String,
    major: String,
    gpa: f64,
    status: String,
}

impl Default for StudentEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            student_code: DEFAULT_STUDENT_CODE.to_string(),
            first_name: DEFAULT_FIRST_NAME.to_string(),
            last_name: DEFAULT_LAST_NAME.to_string(),
            email: DEFAULT_EMAIL.to_string(),
            major: DEFAULT_MAJOR.to_string(),
            gpa: 0.0,
            status: DEFAULT_STATUS.to_string(),
        }
    }
}

impl StudentEntityBuilder {
    /// Sets the student ID.
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets the student code.
    pub fn student_code(mut self, student_code: impl Into<String>) -> Self {
        self.student_code = student_code.into();
        self
    }

    /// Sets the email.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the major code.
    pub fn major(mut self, major: impl Into<String>) -> Self {
        self.major = major.into();
        self
    }

    /// Sets the GPA.
    pub fn gpa(mut self, gpa: f64) -> Self {
        self.gpa = gpa;
        self
    }

    /// Sets the status.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and returns the student entity model.
    pub fn build(self) -> student::Model {
        student::Model {
            id: self.id,
            student_code: self.student_code,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            major: self.major,
            gpa: self.gpa,
            status: self.status,
            created_at: Utc.with_ymd_and_hms(2026, 1, 5, 0, 0, 0).unwrap(),
        }
    }
}
