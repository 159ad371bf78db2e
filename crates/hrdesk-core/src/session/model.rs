//! Session user model.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Session id used for the HR account.
pub const HR_USER_ID: &str = "hr-1";

/// The two roles that decide which command surface is reachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
pub enum Role {
    #[serde(rename = "HR")]
    #[strum(serialize = "HR", ascii_case_insensitive)]
    Hr,
    #[strum(ascii_case_insensitive)]
    Employee,
}

/// The session marker persisted under `currentUser`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub role: Role,
    /// Back-reference to the employee record for `Role::Employee` sessions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
}

impl User {
    /// Session for the HR account.
    pub fn hr(username: impl Into<String>) -> Self {
        Self {
            id: HR_USER_ID.to_string(),
            username: username.into(),
            role: Role::Hr,
            employee_id: None,
        }
    }

    /// Session for an employee, id derived from the employee id.
    pub fn employee(username: impl Into<String>, employee_id: impl Into<String>) -> Self {
        let employee_id = employee_id.into();
        Self {
            id: format!("emp-{}", employee_id),
            username: username.into(),
            role: Role::Employee,
            employee_id: Some(employee_id),
        }
    }

    pub fn is_hr(&self) -> bool {
        self.role == Role::Hr
    }
}
