use super::*;

/// Tests replacing a student's identity fields.
///
/// Expected: Ok with new fields, status and GPA untouched
#[tokio::test]
async fn replaces_identity_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_student_with_status(db, "suspended").await?;

    let service = StudentService::new(StudentRepository::new(db));
    let updated = service
        .update_student(
            &existing.id.to_string(),
            student_data("6799999999", "changed@example.com", "DS"),
        )
        .await
        .unwrap();

    assert_eq!(updated.student_code, "6799999999");
    assert_eq!(updated.email, "changed@example.com");
    assert_eq!(updated.major, Major::Ds);
    assert_eq!(updated.status, StudentStatus::Suspended);

    Ok(())
}

/// Tests updating a missing student with valid data.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn missing_student_is_not_found() {
    let service = StudentService::new(MemoryStudentStore::new());

    let result = service
        .update_student("3", student_data("6754321004", "a@b.co", "CS"))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

/// Tests that field validation runs before the existence check.
///
/// Expected: Err(InvalidEmail) for a missing student with a bad email
#[tokio::test]
async fn validates_fields_before_lookup() {
    let service = StudentService::new(MemoryStudentStore::new());

    let result = service
        .update_student("3", student_data("6754321004", "not-an-email", "CS"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::Validation(ValidationError::InvalidEmail))
    ));
}

/// Tests taking another student's code.
///
/// Expected: Err(Conflict)
#[tokio::test]
async fn code_of_other_student_conflicts() {
    let first = seeded(1, "active");
    let store = MemoryStudentStore::with_students(vec![first.clone(), seeded(2, "active")]);
    let service = StudentService::new(store);

    let result = service
        .update_student(
            "2",
            student_data(&first.student_code, "seeded2@example.com", "CS"),
        )
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
}
