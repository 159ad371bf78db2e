//! Application layer for hrdesk.
//!
//! Use cases that coordinate the domain types in `hrdesk-core` with the
//! file-backed repositories in `hrdesk-infrastructure`.

pub mod auth_usecase;
pub mod bootstrap;
pub mod directory_usecase;
pub mod intake_usecase;
pub mod settings_usecase;

pub use auth_usecase::AuthGate;
pub use bootstrap::{AppContext, resolve_data_dir};
pub use directory_usecase::{EmployeeDirectory, EmployeeRow};
pub use intake_usecase::IntakeService;
pub use settings_usecase::{ProfileUpdate, SettingsService};
