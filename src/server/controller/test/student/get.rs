use super::*;

/// Tests fetching an existing student.
///
/// Expected: 200 with the student
#[tokio::test]
async fn returns_student() -> Result<(), DbErr> {
    let (test, app) = setup().await;
    let existing = factory::create_student(test.db.as_ref().unwrap()).await?;

    let (status, body) = send(
        app,
        Method::GET,
        &format!("/api/students/{}", existing.id),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], existing.id);
    assert_eq!(body["email"], existing.email);

    Ok(())
}

/// Tests fetching a missing student.
///
/// Expected: 404
#[tokio::test]
async fn missing_student_is_not_found() {
    let (_test, app) = setup().await;

    let (status, body) = send(app, Method::GET, "/api/students/999", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Student not found");
}

/// Tests fetching with a non-numeric id.
///
/// Expected: 400
#[tokio::test]
async fn invalid_id_is_bad_request() {
    let (_test, app) = setup().await;

    let (status, body) = send(app, Method::GET, "/api/students/abc", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid student ID");
}
