use chrono::NaiveDate;
use tracing::info;

use crate::db::models::Student;
use crate::error::StudentError;
use crate::service::student_store::StoreHandle;

fn demo(first: &str, last: &str, email: &str, dob: (i32, u32, u32), enrollment: &str) -> Student {
    Student {
        id: None,
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: email.to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(dob.0, dob.1, dob.2).unwrap_or_default(),
        enrollment_number: enrollment.to_string(),
    }
}

/// The fixed demo roster, enrollment numbers 5001..=5004.
pub fn demo_students() -> Vec<Student> {
    vec![
        demo("Juan", "Perez", "juan.perez@gmail.com", (2000, 5, 15), "5001"),
        demo("Maria", "Gonzales", "maria.gonzales@gmail.com", (2001, 11, 20), "5002"),
        demo("Jose", "Casas", "jose.casas@gmail.com", (1999, 5, 17), "5003"),
        demo("Ana", "Ramirez", "ana.ramirez@gmail.com", (2003, 1, 25), "5004"),
    ]
}

/// Save the demo roster in order. Returns how many records were stored.
pub async fn seed(store: &StoreHandle) -> Result<usize, StudentError> {
    let students = demo_students();
    let count = students.len();
    for student in students {
        store.save(student).await?;
    }
    info!(count, "seeded demo students");
    Ok(count)
}
