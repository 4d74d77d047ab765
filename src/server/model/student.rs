//! Student domain models and parameters.
//!
//! Provides the student record as seen by the service layer, the enumerations for
//! major and lifecycle status, raw request inputs awaiting validation, validated
//! parameters handed to the store, and the aggregate statistics returned alongside
//! listings.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::model::student::{
    StudentDto, StudentFilterQuery, StudentListDto, StudentPayloadDto, StudentStatisticsDto,
};

/// Academic program a student is enrolled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Major {
    /// Computer Science
    Cs,
    /// Software Engineering
    Se,
    /// Information Technology
    It,
    /// Computer Engineering
    Ce,
    /// Data Science
    Ds,
}

impl Major {
    pub const ALL: [Major; 5] = [Major::Cs, Major::Se, Major::It, Major::Ce, Major::Ds];

    /// Code stored in the database and exposed on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Major::Cs => "CS",
            Major::Se => "SE",
            Major::It => "IT",
            Major::Ce => "CE",
            Major::Ds => "DS",
        }
    }
}

impl FromStr for Major {
    type Err = ();

    /// Parses a major code. Matching is case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Major::ALL
            .into_iter()
            .find(|major| major.as_str() == s)
            .ok_or(())
    }
}

impl fmt::Display for Major {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle state of a student record.
///
/// `Withdrawn` is terminal: once reached, the status can no longer change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StudentStatus {
    Active,
    Graduated,
    Suspended,
    Withdrawn,
}

impl StudentStatus {
    pub const ALL: [StudentStatus; 4] = [
        StudentStatus::Active,
        StudentStatus::Graduated,
        StudentStatus::Suspended,
        StudentStatus::Withdrawn,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StudentStatus::Active => "active",
            StudentStatus::Graduated => "graduated",
            StudentStatus::Suspended => "suspended",
            StudentStatus::Withdrawn => "withdrawn",
        }
    }
}

impl FromStr for StudentStatus {
    type Err = ();

    /// Parses a status name. Matching is case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StudentStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or(())
    }
}

impl fmt::Display for StudentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persisted student record.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    /// Store-assigned identifier, positive and immutable.
    pub id: i32,
    /// Exactly 10 decimal digits, unique across all records.
    pub student_code: String,
    pub first_name: String,
    pub last_name: String,
    /// Unique across all records.
    pub email: String,
    pub major: Major,
    /// Always within `[0.0, 4.0]`.
    pub gpa: f64,
    pub status: StudentStatus,
    pub created_at: DateTime<Utc>,
}

impl Student {
    /// Converts the student domain model to a DTO for API responses.
    pub fn into_dto(self) -> StudentDto {
        StudentDto {
            id: self.id,
            student_code: self.student_code,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            major: self.major.as_str().to_string(),
            gpa: self.gpa,
            status: self.status.as_str().to_string(),
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a student domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(Student)` - The converted student domain model
    /// - `Err(DbErr::Custom)` - Stored major or status is not a known value
    pub fn from_entity(entity: entity::student::Model) -> Result<Self, DbErr> {
        let major = Major::from_str(&entity.major).map_err(|_| {
            DbErr::Custom(format!(
                "Student {} has unknown major '{}'",
                entity.id, entity.major
            ))
        })?;
        let status = StudentStatus::from_str(&entity.status).map_err(|_| {
            DbErr::Custom(format!(
                "Student {} has unknown status '{}'",
                entity.id, entity.status
            ))
        })?;

        Ok(Self {
            id: entity.id,
            student_code: entity.student_code,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            major,
            gpa: entity.gpa,
            status,
            created_at: entity.created_at,
        })
    }
}

/// Raw identity fields from a create or replace request, before validation.
#[derive(Debug, Clone, Default)]
pub struct StudentData {
    pub student_code: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub major: Option<String>,
}

impl StudentData {
    pub fn from_dto(dto: StudentPayloadDto) -> Self {
        Self {
            student_code: dto.student_code,
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            major: dto.major,
        }
    }
}

/// Validated identity fields for creating or replacing a student.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentParams {
    pub student_code: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub major: Major,
}

/// Raw listing filters from the query string.
#[derive(Debug, Clone, Default)]
pub struct StudentQuery {
    pub major: Option<String>,
    pub status: Option<String>,
}

impl StudentQuery {
    /// Converts query parameters, treating empty values as absent.
    pub fn from_dto(dto: StudentFilterQuery) -> Self {
        Self {
            major: dto.major.filter(|major| !major.is_empty()),
            status: dto.status.filter(|status| !status.is_empty()),
        }
    }
}

/// Validated listing filters; both present filters must match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StudentFilter {
    pub major: Option<Major>,
    pub status: Option<StudentStatus>,
}

/// Aggregates over a set of students.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentStatistics {
    pub active: u64,
    pub graduated: u64,
    pub suspended: u64,
    pub total: u64,
    /// Mean GPA rounded to two decimals; `0.0` for an empty set.
    pub average_gpa: f64,
}

impl StudentStatistics {
    pub fn into_dto(self) -> StudentStatisticsDto {
        StudentStatisticsDto {
            active: self.active,
            graduated: self.graduated,
            suspended: self.suspended,
            total: self.total,
            average_gpa: self.average_gpa,
        }
    }
}

/// Filtered students together with statistics over exactly those students.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentList {
    pub students: Vec<Student>,
    pub statistics: StudentStatistics,
}

impl StudentList {
    pub fn into_dto(self) -> StudentListDto {
        StudentListDto {
            students: self.students.into_iter().map(Student::into_dto).collect(),
            statistics: self.statistics.into_dto(),
        }
    }
}
