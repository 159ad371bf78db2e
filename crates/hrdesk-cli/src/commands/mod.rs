pub mod auth;
pub mod config;
pub mod employees;
pub mod intake;
pub mod settings;
pub mod utils;
