use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::student::{self, STUDENT_TAG},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Student Records API",
        description = "Manage student records, GPA and enrollment status"
    ),
    tags(
        (name = STUDENT_TAG, description = "Student record management")
    )
)]
pub struct ApiDoc;

/// Builds the API router with OpenAPI documentation served at `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(student::get_students, student::create_student))
        .routes(routes!(
            student::get_student_by_id,
            student::update_student,
            student::delete_student
        ))
        .routes(routes!(student::update_student_gpa))
        .routes(routes!(student::update_student_status))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
