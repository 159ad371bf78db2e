//! Employee domain model.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Whether the highest qualification has been completed.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum EducationStatus {
    #[default]
    Passed,
    Appearing,
}

/// Whether the employee joins with prior work experience.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum ExperienceType {
    #[default]
    Fresher,
    Experienced,
}

/// A single employee record as persisted in the `employees` collection.
///
/// Fields are grouped the way the intake wizard collects them. None of them
/// is validated or cross-checked; missing string fields decode as empty so a
/// partially filled record still loads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Employee {
    /// Unique within the store. Millisecond timestamp assigned at submission.
    pub id: String,

    // Basic information
    pub employee_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    pub address: String,
    pub phone_number: String,
    pub email_id: String,
    pub aadhar_number: String,
    pub pan_number: String,
    pub blood_group: String,
    pub father_name: String,
    pub father_mobile: String,
    pub mother_name: String,
    pub mother_mobile: String,

    // Educational information
    pub highest_education: String,
    pub degree_name: String,
    pub specialization: String,
    pub school_college: String,
    pub board_university: String,
    pub year_of_passing: String,
    pub status: EducationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marks_percentage: Option<String>,
    pub certifications: String,

    // Experience information
    pub experience_type: ExperienceType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_held: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_period_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_period_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_leaving: Option<String>,
    #[serde(rename = "previousCTC", skip_serializing_if = "Option::is_none")]
    pub previous_ctc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_experience: Option<String>,

    // For office use
    pub date_of_joining: String,
    pub designation: String,
    pub additional_charge: String,
    pub responsibilities: String,
    pub username: String,
    /// Argon2 PHC string. Empty means the employee cannot sign in.
    pub password_hash: String,

    /// RFC 3339 timestamp of the wizard submission.
    pub created_at: String,
}

impl Employee {
    /// First character of the name, upper-cased, for list avatars.
    pub fn initial(&self) -> Option<char> {
        self.employee_name
            .chars()
            .next()
            .and_then(|c| c.to_uppercase().next())
    }

    /// Whether a sign-in is possible for this record at all.
    pub fn has_credentials(&self) -> bool {
        !self.username.is_empty() && !self.password_hash.is_empty()
    }
}
