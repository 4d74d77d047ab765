use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        student::{
            StudentDto, StudentFilterQuery, StudentListDto, StudentPayloadDto, UpdateGpaDto,
            UpdateStatusDto,
        },
    },
    server::{
        controller::json::AppJson,
        data::student::StudentRepository,
        error::AppError,
        model::student::{StudentData, StudentQuery},
        service::student::StudentService,
        state::AppState,
    },
};

/// Tag for grouping student endpoints in OpenAPI documentation
pub static STUDENT_TAG: &str = "student";

/// List students.
///
/// Returns every student matching the optional `major` and `status` filters, newest
/// first, together with statistics computed over exactly the returned students.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - Optional `major` and `status` filters; empty values are ignored
///
/// # Returns
/// - `200 OK` - Students and statistics
/// - `400 Bad Request` - Unknown major or status filter
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/students",
    tag = STUDENT_TAG,
    params(StudentFilterQuery),
    responses(
        (status = 200, description = "Students with statistics", body = StudentListDto),
        (status = 400, description = "Invalid filter value", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_students(
    State(state): State<AppState>,
    Query(query): Query<StudentFilterQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(StudentRepository::new(&state.db));

    let list = service
        .get_all_students(StudentQuery::from_dto(query))
        .await?;

    Ok((StatusCode::OK, Json(list.into_dto())))
}

/// Get a student by ID.
///
/// # Returns
/// - `200 OK` - The student
/// - `400 Bad Request` - ID is not a positive integer
/// - `404 Not Found` - No student with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Student found", body = StudentDto),
        (status = 400, description = "Invalid student ID", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(StudentRepository::new(&state.db));

    let student = service.get_student_by_id(&id).await?;

    Ok((StatusCode::OK, Json(student.into_dto())))
}

/// Create a new student.
///
/// The student starts with GPA `0.0` and status `active`.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Student code, names, email and major
///
/// # Returns
/// - `201 Created` - Successfully created student
/// - `400 Bad Request` - Missing or malformed field
/// - `409 Conflict` - Student code or email already exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/students",
    tag = STUDENT_TAG,
    request_body = StudentPayloadDto,
    responses(
        (status = 201, description = "Successfully created student", body = StudentDto),
        (status = 400, description = "Invalid student data", body = ErrorDto),
        (status = 409, description = "Student code or email already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_student(
    State(state): State<AppState>,
    AppJson(payload): AppJson<StudentPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(StudentRepository::new(&state.db));

    let student = service
        .create_student(StudentData::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(student.into_dto())))
}

/// Replace a student's identity fields.
///
/// Updates student code, names, email and major. GPA and status are changed through
/// their own endpoints.
#[utoipa::path(
    put,
    path = "/api/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    request_body = StudentPayloadDto,
    responses(
        (status = 200, description = "Successfully updated student", body = StudentDto),
        (status = 400, description = "Invalid student ID or data", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 409, description = "Student code or email already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<StudentPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(StudentRepository::new(&state.db));

    let student = service
        .update_student(&id, StudentData::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(student.into_dto())))
}

/// Set a student's GPA.
#[utoipa::path(
    patch,
    path = "/api/students/{id}/gpa",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    request_body = UpdateGpaDto,
    responses(
        (status = 200, description = "Successfully updated GPA", body = StudentDto),
        (status = 400, description = "Invalid student ID or GPA", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_student_gpa(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<UpdateGpaDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(StudentRepository::new(&state.db));

    let student = service.update_gpa(&id, payload.gpa).await?;

    Ok((StatusCode::OK, Json(student.into_dto())))
}

/// Change a student's status.
///
/// Withdrawn students cannot change status.
///
/// # Returns
/// - `200 OK` - Student with new status
/// - `400 Bad Request` - Invalid ID or status, or the student is withdrawn
/// - `404 Not Found` - No student with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/students/{id}/status",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    request_body = UpdateStatusDto,
    responses(
        (status = 200, description = "Successfully updated status", body = StudentDto),
        (status = 400, description = "Invalid status or student is withdrawn", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_student_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<UpdateStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(StudentRepository::new(&state.db));

    let status = payload.status.unwrap_or_default();
    let student = service.update_status(&id, &status).await?;

    Ok((StatusCode::OK, Json(student.into_dto())))
}

/// Delete a student.
///
/// Only students that are no longer active can be deleted.
///
/// # Returns
/// - `200 OK` - Student deleted
/// - `400 Bad Request` - Invalid ID or the student is still active
/// - `404 Not Found` - No student with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted student", body = MessageDto),
        (status = 400, description = "Invalid student ID or student is active", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(StudentRepository::new(&state.db));

    service.delete_student(&id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Student deleted successfully".to_string(),
        }),
    ))
}
