use sea_orm::entity::prelude::*;

/// A row of the `students` table.
///
/// `major` and `status` hold their wire strings (`"CS"`, `"active"`, ...); the
/// server converts them to typed enums at the repository boundary.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub student_code: String,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub major: String,
    #[sea_orm(column_type = "Double")]
    pub gpa: f64,
    pub status: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
