//! Field catalogue for the intake wizard.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use super::stage::WizardStage;

/// A visibility condition attached to a field.
///
/// Gates only decide what is shown; they never touch buffered values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldGate {
    /// Shown only while `status == Passed`.
    WhenPassed,
    /// Shown only while `experienceType == Experienced`.
    WhenExperienced,
}

/// Every value the wizard collects, keyed the way the record is persisted.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[strum(serialize_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    // Basic information
    EmployeeName,
    PhoneNumber,
    EmailId,
    BloodGroup,
    Address,
    AadharNumber,
    PanNumber,
    FatherName,
    FatherMobile,
    MotherName,
    MotherMobile,
    Photo,

    // Educational information
    HighestEducation,
    DegreeName,
    Specialization,
    YearOfPassing,
    SchoolCollege,
    BoardUniversity,
    Status,
    MarksPercentage,
    Certifications,

    // Experience information
    ExperienceType,
    OrganizationName,
    PostHeld,
    JobPeriodFrom,
    JobPeriodTo,
    #[strum(serialize = "previousCTC")]
    #[serde(rename = "previousCTC")]
    PreviousCtc,
    TotalExperience,
    ReasonLeaving,

    // For office use
    DateOfJoining,
    Designation,
    AdditionalCharge,
    Username,
    Password,
    Responsibilities,
}

const BLOOD_GROUPS: &[&str] = &["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"];
const EDUCATION_LEVELS: &[&str] = &["Diploma", "Degree", "Masters", "PhD"];
const STATUSES: &[&str] = &["Passed", "Appearing"];
const EXPERIENCE_TYPES: &[&str] = &["Fresher", "Experienced"];

impl FormField {
    /// Persisted key, e.g. `employeeName`.
    pub fn key(self) -> &'static str {
        self.into()
    }

    /// Human label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            FormField::EmployeeName => "Employee Name",
            FormField::PhoneNumber => "Phone Number",
            FormField::EmailId => "Email ID",
            FormField::BloodGroup => "Blood Group",
            FormField::Address => "Address",
            FormField::AadharNumber => "Aadhar Card Number",
            FormField::PanNumber => "PAN Card No.",
            FormField::FatherName => "Father Name",
            FormField::FatherMobile => "Father Mobile Number",
            FormField::MotherName => "Mother Name",
            FormField::MotherMobile => "Mother Mobile Number",
            FormField::Photo => "Photo",
            FormField::HighestEducation => "Highest Education",
            FormField::DegreeName => "Name of Degree",
            FormField::Specialization => "Specialization",
            FormField::YearOfPassing => "Year of Passing",
            FormField::SchoolCollege => "School / College",
            FormField::BoardUniversity => "Board / University",
            FormField::Status => "Status",
            FormField::MarksPercentage => "Marks Percentage",
            FormField::Certifications => "Certifications",
            FormField::ExperienceType => "Experience Type",
            FormField::OrganizationName => "Organization Name",
            FormField::PostHeld => "Post Held",
            FormField::JobPeriodFrom => "Job Period From",
            FormField::JobPeriodTo => "Job Period To",
            FormField::PreviousCtc => "Previous CTC",
            FormField::TotalExperience => "Total Experience",
            FormField::ReasonLeaving => "Reason for Leaving",
            FormField::DateOfJoining => "Date of Joining",
            FormField::Designation => "Designation",
            FormField::AdditionalCharge => "Additional Charge",
            FormField::Username => "Username",
            FormField::Password => "Password",
            FormField::Responsibilities => "Responsibilities",
        }
    }

    /// The stage on which this field is entered.
    pub fn stage(self) -> WizardStage {
        use FormField::*;
        match self {
            EmployeeName | PhoneNumber | EmailId | BloodGroup | Address | AadharNumber
            | PanNumber | FatherName | FatherMobile | MotherName | MotherMobile | Photo => {
                WizardStage::Basic
            }
            HighestEducation | DegreeName | Specialization | YearOfPassing | SchoolCollege
            | BoardUniversity | Status | MarksPercentage | Certifications => {
                WizardStage::Education
            }
            ExperienceType | OrganizationName | PostHeld | JobPeriodFrom | JobPeriodTo
            | PreviousCtc | TotalExperience | ReasonLeaving => WizardStage::Experience,
            DateOfJoining | Designation | AdditionalCharge | Username | Password
            | Responsibilities => WizardStage::Office,
        }
    }

    /// The visibility gate on this field, if any.
    pub fn gate(self) -> Option<FieldGate> {
        use FormField::*;
        match self {
            MarksPercentage => Some(FieldGate::WhenPassed),
            OrganizationName | PostHeld | JobPeriodFrom | JobPeriodTo | PreviousCtc
            | TotalExperience | ReasonLeaving => Some(FieldGate::WhenExperienced),
            _ => None,
        }
    }

    /// Fixed options offered for select-style fields.
    pub fn options(self) -> &'static [&'static str] {
        match self {
            FormField::BloodGroup => BLOOD_GROUPS,
            FormField::HighestEducation => EDUCATION_LEVELS,
            FormField::Status => STATUSES,
            FormField::ExperienceType => EXPERIENCE_TYPES,
            _ => &[],
        }
    }

    /// Choice fields are stored as enums and reject unknown values.
    pub fn is_choice(self) -> bool {
        matches!(self, FormField::Status | FormField::ExperienceType)
    }

    /// Values that must not be echoed back.
    pub fn is_secret(self) -> bool {
        self == FormField::Password
    }

    /// All fields entered on `stage`, gated or not, in display order.
    pub fn on_stage(stage: WizardStage) -> impl Iterator<Item = FormField> {
        FormField::iter().filter(move |field| field.stage() == stage)
    }
}
