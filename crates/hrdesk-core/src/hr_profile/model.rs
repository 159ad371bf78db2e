//! HrProfile domain model.

use serde::{Deserialize, Serialize};

/// Display identity of the signed-in HR user.
///
/// There is exactly one slot for it; every save replaces the previous value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HrProfile {
    pub first_name: String,
    pub last_name: String,
    pub mobile_number: String,
    pub designation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_photo: Option<String>,
}

impl HrProfile {
    /// "First Last", trimmed. Empty when neither name is set.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}
