//! File-backed implementations of the hrdesk persistence contracts.

pub mod argon2_hasher;
pub mod json_employee_repository;
pub mod json_hr_profile_repository;
pub mod json_session_repository;
pub mod paths;
pub mod storage;

pub use crate::argon2_hasher::Argon2CredentialHasher;
pub use crate::json_employee_repository::JsonEmployeeRepository;
pub use crate::json_hr_profile_repository::JsonHrProfileRepository;
pub use crate::json_session_repository::JsonSessionRepository;
pub use crate::paths::HrdeskPaths;
