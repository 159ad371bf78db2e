//! Session domain module.
//!
//! The signed-in user is explicit state owned by a `SessionRepository`,
//! never an ambient global.

mod model;
pub mod repository;

pub use model::{HR_USER_ID, Role, User};
pub use repository::SessionRepository;
