//! HR profile domain module.

mod model;
pub mod repository;

pub use model::HrProfile;
pub use repository::HrProfileRepository;
