use crate::db::models::{Student, StudentId};
use crate::error::StudentError;
use crate::service::student_store::StoreHandle;
use crate::types::student::StudentDto;

/// Business-level operations on students. The store only ever sees entities.
#[derive(Clone)]
pub struct StudentService {
    store: StoreHandle,
}

impl StudentService {
    pub fn new(store: StoreHandle) -> Self {
        Self { store }
    }

    #[cfg(test)]
    fn store(&self) -> &StoreHandle {
        &self.store
    }

    pub async fn list_all(&self) -> Result<Vec<StudentDto>, StudentError> {
        let students = self.store.find_all().await?;
        Ok(students.into_iter().map(StudentDto::from).collect())
    }

    pub async fn get_by_id(&self, id: StudentId) -> Result<StudentDto, StudentError> {
        self.store
            .find_by_id(id)
            .await?
            .map(StudentDto::from)
            .ok_or(StudentError::NotFound(id))
    }

    /// Any client-supplied id is dropped; the store always assigns a fresh one.
    pub async fn create(&self, dto: StudentDto) -> Result<StudentDto, StudentError> {
        let mut student = Student::from(dto);
        student.id = None;
        let saved = self.store.save(student).await?;
        Ok(saved.into())
    }

    pub async fn update(&self, id: StudentId, dto: StudentDto) -> Result<StudentDto, StudentError> {
        self.store
            .update(id, Student::from(dto))
            .await?
            .map(StudentDto::from)
            .ok_or(StudentError::NotFound(id))
    }

    /// `Ok(false)` means there was nothing to delete.
    pub async fn delete(&self, id: StudentId) -> Result<bool, StudentError> {
        self.store.delete_by_id(id).await
    }
}
