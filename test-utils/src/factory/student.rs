//! Student factory for creating test student rows.
//!
//! Provides a builder for inserting students with unique codes and emails. Values are
//! written straight through the entity, bypassing service validation, so tests can set
//! up any state (including withdrawn or graduated students) directly.

use crate::factory::helpers::{next_id, student_code_for};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test students with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::student::StudentFactory;
///
/// let student = StudentFactory::new(&db)
///     .student_code("6754321004")
///     .major("SE")
///     .status("suspended")
///     .build()
///     .await?;
/// ```
pub struct StudentFactory<'a> {
    db: &'a DatabaseConnection,
    student_code: String,
    first_name: String,
    last_name: String,
    email: String,
    major: String,
    gpa: f64,
    status: String,
}

impl<'a> StudentFactory<'a> {
    /// Creates a new StudentFactory with default values.
    ///
    /// Defaults:
    /// - student_code: 10 digits derived from an auto-incremented counter
    /// - first_name: `"First {id}"`, last_name: `"Last {id}"`
    /// - email: `"student{id}@example.com"`
    /// - major: `"CS"`, gpa: `0.0`, status: `"active"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            student_code: student_code_for(id),
            first_name: format!("First {}", id),
            last_name: format!("Last {}", id),
            email: format!("student{}@example.com", id),
            major: "CS".to_string(),
            gpa: 0.0,
            status: "active".to_string(),
        }
    }

    /// Sets the student code.
    pub fn student_code(mut self, student_code: impl Into<String>) -> Self {
        self.student_code = student_code.into();
        self
    }

    /// Sets the first name.
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    /// Sets the last name.
    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    /// Sets the email address.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the major code, e.g. `"SE"`.
    pub fn major(mut self, major: impl Into<String>) -> Self {
        self.major = major.into();
        self
    }

    /// Sets the GPA.
    pub fn gpa(mut self, gpa: f64) -> Self {
        self.gpa = gpa;
        self
    }

    /// Sets the status, e.g. `"withdrawn"`.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the student entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::student::Model)` - Created student row with its assigned id
    /// - `Err(DbErr)` - Database error during insert (including unique violations)
    pub async fn build(self) -> Result<entity::student::Model, DbErr> {
        entity::student::ActiveModel {
            student_code: ActiveValue::Set(self.student_code),
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            email: ActiveValue::Set(self.email),
            major: ActiveValue::Set(self.major),
            gpa: ActiveValue::Set(self.gpa),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a student with default values.
///
/// Shorthand for `StudentFactory::new(db).build().await`.
pub async fn create_student(db: &DatabaseConnection) -> Result<entity::student::Model, DbErr> {
    StudentFactory::new(db).build().await
}

/// Creates a student with a specific status and otherwise default values.
///
/// # Arguments
/// - `db` - Database connection
/// - `status` - Status string such as `"graduated"`
pub async fn create_student_with_status(
    db: &DatabaseConnection,
    status: &str,
) -> Result<entity::student::Model, DbErr> {
    StudentFactory::new(db).status(status).build().await
}
