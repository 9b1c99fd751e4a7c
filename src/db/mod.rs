//! Storage-side data: the stored `Student` entity and the demo roster.
//!
//! Layout:
//! - `models.rs`: the entity held by the store and its DTO conversions
//! - `seed.rs`: fixed demo students loaded at startup

pub mod models;
pub mod seed;

pub use models::{Student, StudentId};
pub use seed::{demo_students, seed};
