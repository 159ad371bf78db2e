//! The partial-record buffer shared by all wizard stages.

use std::collections::BTreeMap;

use super::field::{FieldGate, FormField};
use crate::employee::{EducationStatus, Employee, ExperienceType};
use crate::error::{HrError, Result};

/// Accumulates wizard input until submission.
///
/// Navigation never clears it. Choice fields live in typed slots; everything
/// else is free text keyed by `FormField`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormBuffer {
    values: BTreeMap<FormField, String>,
    status: EducationStatus,
    experience_type: ExperienceType,
}

impl FormBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> EducationStatus {
        self.status
    }

    pub fn experience_type(&self) -> ExperienceType {
        self.experience_type
    }

    /// Current value of a field. Choice fields always have one.
    pub fn value(&self, field: FormField) -> Option<String> {
        match field {
            FormField::Status => Some(self.status.to_string()),
            FormField::ExperienceType => Some(self.experience_type.to_string()),
            _ => self.values.get(&field).cloned(),
        }
    }

    /// Stores a value. Choice fields are parsed and unknown options rejected.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) -> Result<()> {
        let value = value.into();
        match field {
            FormField::Status => {
                self.status = value.trim().parse().map_err(|_| {
                    HrError::validation(format!(
                        "'{}' is not a valid status (expected one of: {})",
                        value,
                        field.options().join(", ")
                    ))
                })?;
            }
            FormField::ExperienceType => {
                self.experience_type = value.trim().parse().map_err(|_| {
                    HrError::validation(format!(
                        "'{}' is not a valid experience type (expected one of: {})",
                        value,
                        field.options().join(", ")
                    ))
                })?;
            }
            _ => {
                self.values.insert(field, value);
            }
        }
        Ok(())
    }

    /// Drops every value owned by `gate`. Returns how many were removed.
    pub fn clear_gated(&mut self, gate: FieldGate) -> usize {
        let before = self.values.len();
        self.values.retain(|field, _| field.gate() != Some(gate));
        before - self.values.len()
    }

    /// Whether `field` passes its gate under the current choices.
    pub fn is_gate_open(&self, field: FormField) -> bool {
        match field.gate() {
            None => true,
            Some(FieldGate::WhenPassed) => self.status == EducationStatus::Passed,
            Some(FieldGate::WhenExperienced) => {
                self.experience_type == ExperienceType::Experienced
            }
        }
    }

    /// Number of free-text values held, including hidden ones.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The plain-text password as entered. Never persisted as-is.
    pub fn password(&self) -> Option<&str> {
        self.values.get(&FormField::Password).map(String::as_str)
    }

    /// Builds the final record. Every buffered value is carried over,
    /// including ones currently hidden by a gate.
    pub fn to_employee(
        &self,
        id: impl Into<String>,
        created_at: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Employee {
        let text = |field: FormField| self.values.get(&field).cloned().unwrap_or_default();
        let optional = |field: FormField| self.values.get(&field).cloned();

        Employee {
            id: id.into(),
            employee_name: text(FormField::EmployeeName),
            photo: optional(FormField::Photo),
            address: text(FormField::Address),
            phone_number: text(FormField::PhoneNumber),
            email_id: text(FormField::EmailId),
            aadhar_number: text(FormField::AadharNumber),
            pan_number: text(FormField::PanNumber),
            blood_group: text(FormField::BloodGroup),
            father_name: text(FormField::FatherName),
            father_mobile: text(FormField::FatherMobile),
            mother_name: text(FormField::MotherName),
            mother_mobile: text(FormField::MotherMobile),
            highest_education: text(FormField::HighestEducation),
            degree_name: text(FormField::DegreeName),
            specialization: text(FormField::Specialization),
            school_college: text(FormField::SchoolCollege),
            board_university: text(FormField::BoardUniversity),
            year_of_passing: text(FormField::YearOfPassing),
            status: self.status,
            marks_percentage: optional(FormField::MarksPercentage),
            certifications: text(FormField::Certifications),
            experience_type: self.experience_type,
            organization_name: optional(FormField::OrganizationName),
            post_held: optional(FormField::PostHeld),
            job_period_from: optional(FormField::JobPeriodFrom),
            job_period_to: optional(FormField::JobPeriodTo),
            reason_leaving: optional(FormField::ReasonLeaving),
            previous_ctc: optional(FormField::PreviousCtc),
            total_experience: optional(FormField::TotalExperience),
            date_of_joining: text(FormField::DateOfJoining),
            designation: text(FormField::Designation),
            additional_charge: text(FormField::AdditionalCharge),
            responsibilities: text(FormField::Responsibilities),
            username: text(FormField::Username),
            password_hash: password_hash.into(),
            created_at: created_at.into(),
        }
    }
}
