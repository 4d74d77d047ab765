use super::*;

/// Tests creating a student over HTTP.
///
/// Expected: 201 with the created student
#[tokio::test]
async fn returns_created_student() {
    let (_test, app) = setup().await;

    let (status, body) = send(
        app,
        Method::POST,
        "/api/students",
        Some(payload("6754321004", "somchai.j@example.com")),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["student_code"], "6754321004");
    assert_eq!(body["status"], "active");
    assert_eq!(body["gpa"], 0.0);
    assert!(body["id"].as_i64().unwrap() > 0);
    assert!(body["created_at"].is_string());
}

/// Tests creating a student with a missing field.
///
/// Expected: 400 with the presence message
#[tokio::test]
async fn missing_field_is_bad_request() {
    let (_test, app) = setup().await;

    let (status, body) = send(
        app,
        Method::POST,
        "/api/students",
        Some(json!({ "student_code": "6754321004" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "All fields are required" }));
}

/// Tests creating a student whose email is taken.
///
/// Expected: 409 with the conflict message
#[tokio::test]
async fn duplicate_email_is_conflict() -> Result<(), DbErr> {
    let (test, app) = setup().await;
    let existing = factory::create_student(test.db.as_ref().unwrap()).await?;

    let (status, body) = send(
        app,
        Method::POST,
        "/api/students",
        Some(payload("6799999999", &existing.email)),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Student code or email already exists");

    Ok(())
}
