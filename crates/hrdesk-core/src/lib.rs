//! Domain model and persistence contracts for hrdesk.
//!
//! Nothing in this crate touches the file system; storage implementations
//! live in `hrdesk-infrastructure`.

pub mod clock;
pub mod config;
pub mod credential;
pub mod employee;
pub mod error;
pub mod hr_profile;
pub mod session;
pub mod wizard;

// Re-export common error type
pub use error::{HrError, Result};
