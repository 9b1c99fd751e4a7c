pub mod student_service;
pub mod student_store;

pub use student_service::StudentService;
pub use student_store::StoreHandle;
