use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::db::models::StudentId;

/// Wire representation of a student under `/api/students`.
///
/// `id` is output-only: both write paths take it from the store or the path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDto {
    #[serde(default, skip_deserializing)]
    pub id: Option<StudentId>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// ISO-8601 calendar date, e.g. `2000-05-15`.
    pub date_of_birth: NaiveDate,
    pub enrollment_number: String,
}
