//! Wizard stages.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// The four ordinal stages of employee intake, strictly linear.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
    EnumIter,
)]
pub enum WizardStage {
    Basic,
    Education,
    Experience,
    Office,
}

impl WizardStage {
    /// Number of stages.
    pub const COUNT: u8 = 4;

    /// 1-based ordinal.
    pub fn number(self) -> u8 {
        match self {
            WizardStage::Basic => 1,
            WizardStage::Education => 2,
            WizardStage::Experience => 3,
            WizardStage::Office => 4,
        }
    }

    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(WizardStage::Basic),
            2 => Some(WizardStage::Education),
            3 => Some(WizardStage::Experience),
            4 => Some(WizardStage::Office),
            _ => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStage::Basic => "Basic Information",
            WizardStage::Education => "Educational Information",
            WizardStage::Experience => "Experience Information",
            WizardStage::Office => "For Office Use",
        }
    }

    /// The following stage, `None` at the last one.
    pub fn next(self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    /// The preceding stage, `None` at the first one.
    pub fn previous(self) -> Option<Self> {
        Self::from_number(self.number() - 1)
    }

    pub fn is_first(self) -> bool {
        self == WizardStage::Basic
    }

    pub fn is_last(self) -> bool {
        self == WizardStage::Office
    }
}
