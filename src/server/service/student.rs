//! Student business logic.
//!
//! Each operation validates its raw inputs, checks that the addressed record exists,
//! enforces the status lifecycle rules, and only then delegates to the store.

use crate::server::{
    data::student::StudentStore,
    error::{validation::ValidationError, AppError},
    model::student::{
        Student, StudentData, StudentFilter, StudentList, StudentParams, StudentQuery,
        StudentStatistics, StudentStatus,
    },
    validator::student::{
        validate_email, validate_gpa, validate_id, validate_major, validate_major_if_provided,
        validate_status, validate_status_if_provided, validate_student_code,
        validate_student_data,
    },
};

pub struct StudentService<S: StudentStore> {
    store: S,
}

impl<S: StudentStore> StudentService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Lists students matching the optional filters together with their statistics.
    ///
    /// # Arguments
    /// - `query` - Raw `major` and `status` filters, `None` when not supplied
    ///
    /// # Returns
    /// - `Ok(StudentList)` - Matching students (newest first) and statistics over them
    /// - `Err(AppError::Validation)` - A supplied filter is not a known major or status
    /// - `Err(AppError::DbErr)` - Store failure
    pub async fn get_all_students(&self, query: StudentQuery) -> Result<StudentList, AppError> {
        let filter = StudentFilter {
            major: validate_major_if_provided(query.major.as_deref())?,
            status: validate_status_if_provided(query.status.as_deref())?,
        };

        let students = self.store.find_all(&filter).await?;
        let statistics = compute_statistics(&students);

        tracing::debug!(count = students.len(), "Listed students");

        Ok(StudentList {
            students,
            statistics,
        })
    }

    /// Gets a single student by its path id.
    ///
    /// # Returns
    /// - `Ok(Student)` - The student
    /// - `Err(AppError::Validation)` - `id` is not a positive integer
    /// - `Err(AppError::NotFound)` - No student with that id
    pub async fn get_student_by_id(&self, id: &str) -> Result<Student, AppError> {
        let id = validate_id(id)?;

        self.find_existing(id).await
    }

    /// Creates a student with GPA `0.0` and status `active`.
    ///
    /// # Returns
    /// - `Ok(Student)` - The created student
    /// - `Err(AppError::Validation)` - A field is missing or malformed
    /// - `Err(AppError::Conflict)` - Student code or email already exists
    pub async fn create_student(&self, data: StudentData) -> Result<Student, AppError> {
        let params = validate_params(data)?;

        let student = self.store.create(params).await?;

        tracing::info!(student_id = student.id, student_code = %student.student_code, "Created student");

        Ok(student)
    }

    /// Replaces a student's code, names, email and major.
    ///
    /// GPA, status and creation time are preserved.
    pub async fn update_student(&self, id: &str, data: StudentData) -> Result<Student, AppError> {
        let id = validate_id(id)?;
        let params = validate_params(data)?;

        self.find_existing(id).await?;

        let student = self.store.update(id, params).await?;

        tracing::info!(student_id = student.id, "Updated student");

        Ok(student)
    }

    /// Sets a student's GPA.
    pub async fn update_gpa(&self, id: &str, gpa: Option<f64>) -> Result<Student, AppError> {
        let id = validate_id(id)?;
        let gpa = validate_gpa(gpa)?;

        self.find_existing(id).await?;

        let student = self.store.update_gpa(id, gpa).await?;

        tracing::info!(student_id = student.id, gpa, "Updated student GPA");

        Ok(student)
    }

    /// Moves a student to a new status.
    ///
    /// A withdrawn student can never change status, whatever the target (including
    /// `withdrawn` itself).
    ///
    /// # Returns
    /// - `Ok(Student)` - The student with its new status
    /// - `Err(AppError::Validation)` - Invalid id or status, or the student is withdrawn
    /// - `Err(AppError::NotFound)` - No student with that id
    pub async fn update_status(&self, id: &str, status: &str) -> Result<Student, AppError> {
        let id = validate_id(id)?;
        let status = validate_status(status)?;

        let current = self.find_existing(id).await?;
        if current.status == StudentStatus::Withdrawn {
            return Err(ValidationError::WithdrawnStatusLocked.into());
        }

        let student = self.store.update_status(id, status).await?;

        tracing::info!(
            student_id = student.id,
            from = %current.status,
            to = %student.status,
            "Updated student status"
        );

        Ok(student)
    }

    /// Permanently deletes a student that is no longer active.
    ///
    /// # Returns
    /// - `Ok(())` - Student removed
    /// - `Err(AppError::Validation)` - Invalid id, or the student is still active
    /// - `Err(AppError::NotFound)` - No student with that id
    pub async fn delete_student(&self, id: &str) -> Result<(), AppError> {
        let id = validate_id(id)?;

        let current = self.find_existing(id).await?;
        if current.status == StudentStatus::Active {
            return Err(ValidationError::ActiveStudentDelete.into());
        }

        self.store.delete(id).await?;

        tracing::info!(student_id = id, "Deleted student");

        Ok(())
    }

    async fn find_existing(&self, id: i32) -> Result<Student, AppError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Student not found".to_string()))
    }
}

/// Runs the create/replace field checks in order: presence, code, email, major.
fn validate_params(data: StudentData) -> Result<StudentParams, ValidationError> {
    validate_student_data(&data)?;

    let StudentData {
        student_code: Some(student_code),
        first_name: Some(first_name),
        last_name: Some(last_name),
        email: Some(email),
        major: Some(major),
    } = data
    else {
        return Err(ValidationError::MissingFields);
    };

    validate_student_code(&student_code)?;
    validate_email(&email)?;
    let major = validate_major(&major)?;

    Ok(StudentParams {
        student_code,
        first_name,
        last_name,
        email,
        major,
    })
}

/// Counts students per reportable status and averages their GPA.
///
/// The average is rounded half away from zero to two decimals and is `0.0` for an
/// empty slice. Withdrawn students count toward `total` only.
pub fn compute_statistics(students: &[Student]) -> StudentStatistics {
    let count = |status: StudentStatus| {
        students
            .iter()
            .filter(|student| student.status == status)
            .count() as u64
    };

    let total = students.len() as u64;
    let average_gpa = if students.is_empty() {
        0.0
    } else {
        let sum: f64 = students.iter().map(|student| student.gpa).sum();
        (sum / students.len() as f64 * 100.0).round() / 100.0
    };

    StudentStatistics {
        active: count(StudentStatus::Active),
        graduated: count(StudentStatus::Graduated),
        suspended: count(StudentStatus::Suspended),
        total,
        average_gpa,
    }
}
