//! Employee intake wizard.
//!
//! A four-stage linear form (Basic, Education, Experience, Office) that fills
//! one shared buffer and yields a single `Employee` on submission.
//!
//! # Module Structure
//!
//! - `stage`: Stage ordinals and transitions
//! - `field`: Field catalogue with labels, owning stage and visibility gates
//! - `buffer`: The partial-record buffer
//! - `controller`: The state machine and hidden-field policy

mod buffer;
mod controller;
mod field;
mod stage;

pub use buffer::FormBuffer;
pub use controller::{HiddenFieldPolicy, IntakeWizard};
pub use field::{FieldGate, FormField};
pub use stage::WizardStage;
