use super::memory_store::MemoryStudentStore;
use crate::server::{
    data::student::StudentRepository,
    error::{validation::ValidationError, AppError},
    model::student::{Major, Student, StudentData, StudentQuery, StudentStatus},
    service::student::StudentService,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, fixture};

mod delete_student;
mod update_student;

fn student_data(student_code: &str, email: &str, major: &str) -> StudentData {
    StudentData {
        student_code: Some(student_code.to_string()),
        first_name: Some("Somchai".to_string()),
        last_name: Some("Jaidee".to_string()),
        email: Some(email.to_string()),
        major: Some(major.to_string()),
    }
}

/// Builds a domain student from the default fixture with the given id and status.
fn seeded(id: i32, status: &str) -> Student {
    Student::from_entity(
        fixture::student_entity_builder()
            .id(id)
            .student_code(format!("{:010}", 6_754_000_000_i64 + id as i64))
            .email(format!("seeded{}@example.com", id))
            .status(status)
            .build(),
    )
    .unwrap()
}
