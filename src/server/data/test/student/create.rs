use super::*;

/// Tests creating a new student.
///
/// Verifies that the repository inserts the identity fields and fills in the
/// defaults for GPA and status.
///
/// Expected: Ok with active student at GPA 0.0
#[tokio::test]
async fn creates_student_with_defaults() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let student = repo
        .create(params("6754321004", "somchai.j@example.com", Major::Cs))
        .await
        .unwrap();

    assert!(student.id > 0);
    assert_eq!(student.student_code, "6754321004");
    assert_eq!(student.email, "somchai.j@example.com");
    assert_eq!(student.major, Major::Cs);
    assert_eq!(student.gpa, 0.0);
    assert_eq!(student.status, StudentStatus::Active);

    // Verify in database
    let db_student = entity::prelude::Student::find_by_id(student.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_student.status, "active");
    assert_eq!(db_student.major, "CS");

    Ok(())
}

/// Tests that identifiers increase with each insert.
///
/// Expected: second ID greater than first
#[tokio::test]
async fn assigns_increasing_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let first = repo
        .create(params("6700000001", "one@example.com", Major::Se))
        .await
        .unwrap();
    let second = repo
        .create(params("6700000002", "two@example.com", Major::It))
        .await
        .unwrap();

    assert!(second.id > first.id);

    Ok(())
}

/// Tests creating a student with a student code already in use.
///
/// Expected: Err(UniqueViolation)
#[tokio::test]
async fn rejects_duplicate_student_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_student(db).await?;

    let repo = StudentRepository::new(db);
    let result = repo
        .create(params(&existing.student_code, "fresh@example.com", Major::Cs))
        .await;

    assert!(matches!(result, Err(StoreError::UniqueViolation(_))));

    Ok(())
}

/// Tests creating a student with an email already in use.
///
/// Expected: Err(UniqueViolation)
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_student(db).await?;

    let repo = StudentRepository::new(db);
    let result = repo
        .create(params("6799999999", &existing.email, Major::Cs))
        .await;

    assert!(matches!(result, Err(StoreError::UniqueViolation(_))));

    Ok(())
}

/// Tests creating a student when the table is missing.
///
/// Verifies that failures other than uniqueness are reported as generic database errors.
///
/// Expected: Err(Db)
#[tokio::test]
async fn fails_when_table_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let result = repo
        .create(params("6754321004", "somchai.j@example.com", Major::Cs))
        .await;

    assert!(matches!(result, Err(StoreError::Db(_))));

    Ok(())
}
