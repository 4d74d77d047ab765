//! Student data repository for database operations.
//!
//! This module provides the `StudentStore` abstraction used by the service layer and
//! the `StudentRepository` implementation backed by SeaORM. Entity models are converted
//! to domain models at this boundary and database errors are classified into
//! `StoreError` so uniqueness conflicts and vanished rows can be told apart.

use std::future::Future;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    error::store::StoreError,
    model::student::{Student, StudentFilter, StudentParams, StudentStatus},
};

/// Persistence operations over student records.
///
/// Implementations must reject a `student_code` or `email` already used by another
/// record with `StoreError::UniqueViolation`, and report writes against a missing id
/// with `StoreError::RecordNotFound`.
pub trait StudentStore {
    /// Lists students matching the filter, newest first.
    fn find_all(
        &self,
        filter: &StudentFilter,
    ) -> impl Future<Output = Result<Vec<Student>, StoreError>> + Send;

    fn find_by_id(
        &self,
        id: i32,
    ) -> impl Future<Output = Result<Option<Student>, StoreError>> + Send;

    /// Inserts a new student with GPA `0.0`, status `active` and the current timestamp.
    fn create(
        &self,
        params: StudentParams,
    ) -> impl Future<Output = Result<Student, StoreError>> + Send;

    /// Replaces the identity fields of a student, keeping GPA, status and creation time.
    fn update(
        &self,
        id: i32,
        params: StudentParams,
    ) -> impl Future<Output = Result<Student, StoreError>> + Send;

    fn update_gpa(
        &self,
        id: i32,
        gpa: f64,
    ) -> impl Future<Output = Result<Student, StoreError>> + Send;

    fn update_status(
        &self,
        id: i32,
        status: StudentStatus,
    ) -> impl Future<Output = Result<Student, StoreError>> + Send;

    fn delete(&self, id: i32) -> impl Future<Output = Result<(), StoreError>> + Send;
}

/// Repository providing database operations for student records.
///
/// This struct holds a reference to the database connection and implements
/// `StudentStore` against the `students` table.
pub struct StudentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentRepository<'a> {
    /// Creates a new StudentRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `StudentRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads the entity for a write, failing with `RecordNotFound` if it is gone.
    async fn find_entity_for_update(
        &self,
        id: i32,
    ) -> Result<entity::student::ActiveModel, DbErr> {
        let student = entity::prelude::Student::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Student with id {} not found",
                id
            )))?;

        Ok(student.into())
    }
}

impl StudentStore for StudentRepository<'_> {
    /// Gets students matching the filter.
    ///
    /// Applies the major and status filters in the query and orders by descending id,
    /// so the most recently created students come first.
    ///
    /// # Arguments
    /// - `filter` - Optional major and status criteria; both must match when present
    ///
    /// # Returns
    /// - `Ok(Vec<Student>)` - Matching students, possibly empty
    /// - `Err(StoreError::Db)` - Database error or a row with an unknown major/status
    async fn find_all(&self, filter: &StudentFilter) -> Result<Vec<Student>, StoreError> {
        let mut query = entity::prelude::Student::find();

        if let Some(major) = filter.major {
            query = query.filter(entity::student::Column::Major.eq(major.as_str()));
        }
        if let Some(status) = filter.status {
            query = query.filter(entity::student::Column::Status.eq(status.as_str()));
        }

        let entities = query
            .order_by_desc(entity::student::Column::Id)
            .all(self.db)
            .await?;

        entities
            .into_iter()
            .map(|entity| Student::from_entity(entity).map_err(StoreError::from))
            .collect()
    }

    /// Gets a student by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Student))` - Student found
    /// - `Ok(None)` - No student with that ID
    /// - `Err(StoreError::Db)` - Database error during query
    async fn find_by_id(&self, id: i32) -> Result<Option<Student>, StoreError> {
        let entity = entity::prelude::Student::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Student::from_entity).transpose()?)
    }

    /// Creates a new student.
    ///
    /// # Returns
    /// - `Ok(Student)` - The created student with its assigned ID
    /// - `Err(StoreError::UniqueViolation)` - Student code or email already taken
    /// - `Err(StoreError::Db)` - Database error during insert
    async fn create(&self, params: StudentParams) -> Result<Student, StoreError> {
        let entity = entity::student::ActiveModel {
            student_code: ActiveValue::Set(params.student_code),
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            email: ActiveValue::Set(params.email),
            major: ActiveValue::Set(params.major.as_str().to_string()),
            gpa: ActiveValue::Set(0.0),
            status: ActiveValue::Set(StudentStatus::Active.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Student::from_entity(entity)?)
    }

    /// Updates a student's identity fields.
    ///
    /// # Returns
    /// - `Ok(Student)` - The updated student
    /// - `Err(StoreError::RecordNotFound)` - No student with that ID
    /// - `Err(StoreError::UniqueViolation)` - New code or email belongs to another student
    /// - `Err(StoreError::Db)` - Database error during update
    async fn update(&self, id: i32, params: StudentParams) -> Result<Student, StoreError> {
        let mut active_model = self.find_entity_for_update(id).await?;
        active_model.student_code = ActiveValue::Set(params.student_code);
        active_model.first_name = ActiveValue::Set(params.first_name);
        active_model.last_name = ActiveValue::Set(params.last_name);
        active_model.email = ActiveValue::Set(params.email);
        active_model.major = ActiveValue::Set(params.major.as_str().to_string());

        let entity = active_model.update(self.db).await?;

        Ok(Student::from_entity(entity)?)
    }

    async fn update_gpa(&self, id: i32, gpa: f64) -> Result<Student, StoreError> {
        let mut active_model = self.find_entity_for_update(id).await?;
        active_model.gpa = ActiveValue::Set(gpa);

        let entity = active_model.update(self.db).await?;

        Ok(Student::from_entity(entity)?)
    }

    async fn update_status(&self, id: i32, status: StudentStatus) -> Result<Student, StoreError> {
        let mut active_model = self.find_entity_for_update(id).await?;
        active_model.status = ActiveValue::Set(status.as_str().to_string());

        let entity = active_model.update(self.db).await?;

        Ok(Student::from_entity(entity)?)
    }

    /// Deletes a student.
    ///
    /// # Returns
    /// - `Ok(())` - Student deleted
    /// - `Err(StoreError::RecordNotFound)` - No row was removed
    /// - `Err(StoreError::Db)` - Database error during delete
    async fn delete(&self, id: i32) -> Result<(), StoreError> {
        let result = entity::prelude::Student::delete_by_id(id)
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(StoreError::RecordNotFound(format!(
                "Student with id {} not found",
                id
            )));
        }

        Ok(())
    }
}
