use super::*;

/// Tests a GPA sent as a string.
///
/// Verifies that a wrong field type is reported with the JSON error body instead of
/// the extractor's plain-text rejection.
///
/// Expected: 400 with an `error` message
#[tokio::test]
async fn wrong_gpa_type_is_bad_request() -> Result<(), DbErr> {
    let (test, app) = setup().await;
    let existing = factory::create_student(test.db.as_ref().unwrap()).await?;

    let (status, body) = send(
        app,
        Method::PATCH,
        &format!("/api/students/{}/gpa", existing.id),
        Some(json!({ "gpa": "abc" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    Ok(())
}

/// Tests a numeric student code on create.
///
/// Expected: 400 with an `error` message and nothing persisted
#[tokio::test]
async fn wrong_student_code_type_is_bad_request() {
    let (_test, app) = setup().await;

    let (status, body) = send(
        app.clone(),
        Method::POST,
        "/api/students",
        Some(json!({
            "student_code": 6754321004_u64,
            "first_name": "Somchai",
            "last_name": "Jaidee",
            "email": "somchai.j@example.com",
            "major": "CS"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (_, body) = send(app, Method::GET, "/api/students", None).await;
    assert_eq!(body["statistics"]["total"], 0);
}

/// Tests a body that is not valid JSON.
///
/// Expected: 400 with an `error` message
#[tokio::test]
async fn broken_json_is_bad_request() -> Result<(), DbErr> {
    let (test, app) = setup().await;
    let existing = factory::create_student(test.db.as_ref().unwrap()).await?;

    let (status, body) = send_raw(
        app,
        Method::PATCH,
        &format!("/api/students/{}/status", existing.id),
        Some("application/json"),
        "{\"status\": ",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    Ok(())
}

/// Tests a JSON body sent without a content type.
///
/// Expected: 400 with an `error` message
#[tokio::test]
async fn missing_content_type_is_bad_request() -> Result<(), DbErr> {
    let (test, app) = setup().await;
    let existing = factory::create_student(test.db.as_ref().unwrap()).await?;

    let (status, body) = send_raw(
        app,
        Method::PUT,
        &format!("/api/students/{}", existing.id),
        None,
        "{\"student_code\": \"6711111111\"}",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    Ok(())
}
