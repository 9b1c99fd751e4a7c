use axum::{Router, routing::get};

use crate::handlers::students::{
    create_student, delete_student, get_student, list_students, update_student,
};
use crate::service::{StoreHandle, StudentService};

pub const STUDENTS_BASE_PATH: &str = "/api/students";

#[derive(Clone)]
pub struct StudentsState {
    pub service: StudentService,
}

impl StudentsState {
    pub fn new(store: StoreHandle) -> Self {
        Self {
            service: StudentService::new(store),
        }
    }
}

pub fn students_router(state: StudentsState) -> Router {
    let item_path = format!("{STUDENTS_BASE_PATH}/{{id}}");
    Router::new()
        .route(STUDENTS_BASE_PATH, get(list_students).post(create_student))
        .route(
            &item_path,
            get(get_student).put(update_student).delete(delete_student),
        )
        .with_state(state)
}
