use super::*;

/// Tests deleting a graduated student.
///
/// Expected: 200 with confirmation message
#[tokio::test]
async fn deletes_graduated_student() -> Result<(), DbErr> {
    let (test, app) = setup().await;
    let existing =
        factory::create_student_with_status(test.db.as_ref().unwrap(), "graduated").await?;

    let (status, body) = send(
        app.clone(),
        Method::DELETE,
        &format!("/api/students/{}", existing.id),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Student deleted successfully" }));

    let (status, _) = send(
        app,
        Method::GET,
        &format!("/api/students/{}", existing.id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests deleting an active student.
///
/// Expected: 400 with the active-delete message
#[tokio::test]
async fn active_student_is_bad_request() -> Result<(), DbErr> {
    let (test, app) = setup().await;
    let existing = factory::create_student(test.db.as_ref().unwrap()).await?;

    let (status, body) = send(
        app,
        Method::DELETE,
        &format!("/api/students/{}", existing.id),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Cannot delete active student. Change status first."
    );

    Ok(())
}

/// Tests deleting a missing student.
///
/// Expected: 404
#[tokio::test]
async fn missing_student_is_not_found() {
    let (_test, app) = setup().await;

    let (status, _) = send(app, Method::DELETE, "/api/students/404", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
