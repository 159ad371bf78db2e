//! Employee domain module.
//!
//! # Module Structure
//!
//! - `model`: The persisted `Employee` record and its choice enums
//! - `repository`: Employee repository trait for persistence

mod model;
pub mod repository;

pub use model::{EducationStatus, Employee, ExperienceType};
pub use repository::EmployeeRepository;
