use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A student record as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StudentDto {
    pub id: i32,
    /// Exactly 10 digits.
    pub student_code: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// One of `CS`, `SE`, `IT`, `CE`, `DS`.
    pub major: String,
    pub gpa: f64,
    /// One of `active`, `graduated`, `suspended`, `withdrawn`.
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Request body for creating or fully replacing a student.
///
/// Every field is optional on the wire so a missing field is reported as a validation
/// error rather than a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct StudentPayloadDto {
    #[serde(default)]
    pub student_code: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub major: Option<String>,
}

/// Query parameters for `GET /api/students`.
///
/// Empty values are treated as if the parameter were absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StudentFilterQuery {
    /// Only list students in this major.
    #[serde(default)]
    pub major: Option<String>,
    /// Only list students with this status.
    #[serde(default)]
    pub status: Option<String>,
}

/// Request body for `PATCH /api/students/{id}/gpa`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateGpaDto {
    #[serde(default)]
    pub gpa: Option<f64>,
}

/// Request body for `PATCH /api/students/{id}/status`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateStatusDto {
    #[serde(default)]
    pub status: Option<String>,
}

/// Aggregates computed over the listed students.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StudentStatisticsDto {
    pub active: u64,
    pub graduated: u64,
    pub suspended: u64,
    pub total: u64,
    /// Mean GPA rounded to two decimals, `0` when there are no students.
    #[serde(rename = "averageGPA")]
    pub average_gpa: f64,
}

/// Response body for `GET /api/students`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StudentListDto {
    pub students: Vec<StudentDto>,
    pub statistics: StudentStatisticsDto,
}
