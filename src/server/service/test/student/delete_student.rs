use super::*;

/// Tests that an active student cannot be deleted.
///
/// Expected: Err(ActiveStudentDelete) and record kept
#[tokio::test]
async fn active_student_is_kept() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_student(db).await?;

    let service = StudentService::new(StudentRepository::new(db));
    let result = service.delete_student(&existing.id.to_string()).await;

    assert!(matches!(
        result,
        Err(AppError::Validation(ValidationError::ActiveStudentDelete))
    ));
    assert!(service
        .get_student_by_id(&existing.id.to_string())
        .await
        .is_ok());

    Ok(())
}

/// Tests deleting students in each non-active status.
///
/// Expected: Ok and record removed
#[tokio::test]
async fn non_active_students_are_deleted() {
    let store = MemoryStudentStore::with_students(vec![
        seeded(1, "graduated"),
        seeded(2, "suspended"),
        seeded(3, "withdrawn"),
    ]);
    let service = StudentService::new(store);

    for id in ["1", "2", "3"] {
        service.delete_student(id).await.unwrap();

        assert!(matches!(
            service.get_student_by_id(id).await,
            Err(AppError::NotFound(_))
        ));
    }
}

/// Tests deleting a missing student.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn missing_student_is_not_found() {
    let store = MemoryStudentStore::with_students(vec![seeded(1, "graduated")]);
    let service = StudentService::new(store);

    let result = service.delete_student("2").await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}
