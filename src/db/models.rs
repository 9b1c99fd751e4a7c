use chrono::NaiveDate;

use crate::types::student::StudentDto;

pub type StudentId = i64;

/// A student as held by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    /// `None` until the store assigns one on first save.
    pub id: Option<StudentId>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub enrollment_number: String,
}

impl Student {
    /// Overwrite every field except the id.
    pub fn apply(&mut self, fields: Student) {
        self.first_name = fields.first_name;
        self.last_name = fields.last_name;
        self.email = fields.email;
        self.date_of_birth = fields.date_of_birth;
        self.enrollment_number = fields.enrollment_number;
    }
}

impl From<StudentDto> for Student {
    fn from(d: StudentDto) -> Self {
        Self {
            id: d.id,
            first_name: d.first_name,
            last_name: d.last_name,
            email: d.email,
            date_of_birth: d.date_of_birth,
            enrollment_number: d.enrollment_number,
        }
    }
}

impl From<Student> for StudentDto {
    fn from(s: Student) -> Self {
        StudentDto {
            id: s.id,
            first_name: s.first_name,
            last_name: s.last_name,
            email: s.email,
            date_of_birth: s.date_of_birth,
            enrollment_number: s.enrollment_number,
        }
    }
}
