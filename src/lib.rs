pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod router;
pub mod service;
pub mod types;

pub use error::StudentError;
pub use service::{StoreHandle, StudentService};
pub use types::student::StudentDto;
