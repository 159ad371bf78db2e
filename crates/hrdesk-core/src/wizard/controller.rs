//! The intake wizard state machine.

use serde::{Deserialize, Serialize};

use super::buffer::FormBuffer;
use super::field::{FieldGate, FormField};
use super::stage::WizardStage;
use crate::employee::{EducationStatus, ExperienceType};
use crate::error::{HrError, Result};

/// What happens to values owned by a conditional branch when the choice
/// controlling that branch changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HiddenFieldPolicy {
    /// Hidden values stay in the buffer and are saved on submission.
    /// Flipping the choice back shows them again without re-entry.
    #[default]
    Retain,
    /// Values owned by the branch being left are dropped immediately.
    ClearOnBranchChange,
}

/// Four-stage linear wizard over a single shared buffer.
///
/// The wizard is plain state owned by its caller. Submission (id assignment,
/// hashing, persistence) lives in the application layer; this type only
/// enforces stage order, visibility and the hidden-field policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakeWizard {
    stage: WizardStage,
    buffer: FormBuffer,
    policy: HiddenFieldPolicy,
}

impl Default for IntakeWizard {
    fn default() -> Self {
        Self::new(HiddenFieldPolicy::default())
    }
}

impl IntakeWizard {
    pub fn new(policy: HiddenFieldPolicy) -> Self {
        Self {
            stage: WizardStage::Basic,
            buffer: FormBuffer::new(),
            policy,
        }
    }

    pub fn stage(&self) -> WizardStage {
        self.stage
    }

    pub fn buffer(&self) -> &FormBuffer {
        &self.buffer
    }

    pub fn policy(&self) -> HiddenFieldPolicy {
        self.policy
    }

    /// Advances one stage. No-op on the last stage.
    pub fn next(&mut self) -> WizardStage {
        if let Some(next) = self.stage.next() {
            self.stage = next;
        }
        self.stage
    }

    /// Goes back one stage. No-op on the first stage.
    pub fn previous(&mut self) -> WizardStage {
        if let Some(previous) = self.stage.previous() {
            self.stage = previous;
        }
        self.stage
    }

    /// Fields shown on the current stage, after gates are applied.
    pub fn visible_fields(&self) -> Vec<FormField> {
        FormField::on_stage(self.stage)
            .filter(|field| self.buffer.is_gate_open(*field))
            .collect()
    }

    pub fn is_visible(&self, field: FormField) -> bool {
        field.stage() == self.stage && self.buffer.is_gate_open(field)
    }

    /// Sets a field shown on the current stage.
    ///
    /// Changing `status` or `experienceType` applies the hidden-field policy
    /// to the branch being left.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) -> Result<()> {
        if !self.is_visible(field) {
            return Err(HrError::validation(format!(
                "'{}' is not shown on stage {} ({})",
                field,
                self.stage.number(),
                self.stage.title()
            )));
        }

        let previous_status = self.buffer.status();
        let previous_experience = self.buffer.experience_type();

        self.buffer.set(field, value)?;

        if self.policy == HiddenFieldPolicy::ClearOnBranchChange {
            if previous_status == EducationStatus::Passed
                && self.buffer.status() != EducationStatus::Passed
            {
                self.buffer.clear_gated(FieldGate::WhenPassed);
            }
            if previous_experience == ExperienceType::Experienced
                && self.buffer.experience_type() != ExperienceType::Experienced
            {
                self.buffer.clear_gated(FieldGate::WhenExperienced);
            }
        }

        Ok(())
    }

    /// Current value of any field, visible or not.
    pub fn value(&self, field: FormField) -> Option<String> {
        self.buffer.value(field)
    }

    /// Submission is only reachable from the last stage.
    pub fn can_submit(&self) -> bool {
        self.stage.is_last()
    }

    /// Returns the buffer for submission, or a validation error when the
    /// wizard is not on its last stage.
    pub fn submission(&self) -> Result<&FormBuffer> {
        if !self.can_submit() {
            return Err(HrError::validation(format!(
                "submission is only possible from stage {} ({}), currently on stage {}",
                WizardStage::Office.number(),
                WizardStage::Office.title(),
                self.stage.number()
            )));
        }
        Ok(&self.buffer)
    }

    /// Back to stage 1 with a buffer holding only the two default choices.
    pub fn reset(&mut self) {
        self.stage = WizardStage::Basic;
        self.buffer = FormBuffer::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_basic(wizard: &mut IntakeWizard) {
        wizard.set_field(FormField::EmployeeName, "Anil Kumar").unwrap();
        wizard.set_field(FormField::PhoneNumber, "9811111111").unwrap();
        wizard.set_field(FormField::BloodGroup, "O+").unwrap();
    }

    #[test]
    fn test_navigation_is_linear_and_clamped() {
        let mut wizard = IntakeWizard::default();
        assert_eq!(wizard.previous(), WizardStage::Basic);

        assert_eq!(wizard.next(), WizardStage::Education);
        assert_eq!(wizard.next(), WizardStage::Experience);
        assert_eq!(wizard.next(), WizardStage::Office);
        assert_eq!(wizard.next(), WizardStage::Office);
    }

    #[test]
    fn test_round_trip_keeps_stage_one_values() {
        let mut wizard = IntakeWizard::default();
        fill_basic(&mut wizard);

        for _ in 0..3 {
            wizard.next();
        }
        assert_eq!(wizard.stage(), WizardStage::Office);

        for _ in 0..4 {
            wizard.previous();
        }
        assert_eq!(wizard.stage(), WizardStage::Basic);
        assert_eq!(
            wizard.value(FormField::EmployeeName).as_deref(),
            Some("Anil Kumar")
        );
        assert_eq!(wizard.value(FormField::BloodGroup).as_deref(), Some("O+"));
    }

    #[test]
    fn test_marks_gate_follows_status() {
        let mut wizard = IntakeWizard::default();
        wizard.next();
        assert!(wizard.visible_fields().contains(&FormField::MarksPercentage));

        wizard.set_field(FormField::Status, "Appearing").unwrap();
        assert!(!wizard.visible_fields().contains(&FormField::MarksPercentage));
        assert!(wizard.set_field(FormField::MarksPercentage, "72").is_err());
    }

    #[test]
    fn test_organization_gate_follows_experience_type() {
        let mut wizard = IntakeWizard::default();
        wizard.next();
        wizard.next();
        assert_eq!(wizard.visible_fields(), vec![FormField::ExperienceType]);

        wizard.set_field(FormField::ExperienceType, "Experienced").unwrap();
        assert_eq!(wizard.visible_fields().len(), 8);
    }

    #[test]
    fn test_fields_of_other_stages_are_rejected() {
        let mut wizard = IntakeWizard::default();
        let err = wizard.set_field(FormField::Designation, "Manager").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_retain_policy_keeps_hidden_branch() {
        let mut wizard = IntakeWizard::new(HiddenFieldPolicy::Retain);
        wizard.next();
        wizard.next();
        wizard.set_field(FormField::ExperienceType, "Experienced").unwrap();
        wizard.set_field(FormField::OrganizationName, "Acme").unwrap();
        wizard.set_field(FormField::ExperienceType, "Fresher").unwrap();

        assert!(!wizard.is_visible(FormField::OrganizationName));
        assert_eq!(
            wizard.value(FormField::OrganizationName).as_deref(),
            Some("Acme")
        );

        // flipping back shows the retained value again
        wizard.set_field(FormField::ExperienceType, "Experienced").unwrap();
        assert!(wizard.is_visible(FormField::OrganizationName));
    }

    #[test]
    fn test_clear_policy_drops_hidden_branch() {
        let mut wizard = IntakeWizard::new(HiddenFieldPolicy::ClearOnBranchChange);
        wizard.next();
        wizard.set_field(FormField::MarksPercentage, "88").unwrap();
        wizard.set_field(FormField::Status, "Appearing").unwrap();
        assert_eq!(wizard.value(FormField::MarksPercentage), None);

        wizard.next();
        wizard.set_field(FormField::ExperienceType, "Experienced").unwrap();
        wizard.set_field(FormField::OrganizationName, "Acme").unwrap();
        wizard.set_field(FormField::ExperienceType, "Experienced").unwrap();
        assert_eq!(
            wizard.value(FormField::OrganizationName).as_deref(),
            Some("Acme")
        );
        wizard.set_field(FormField::ExperienceType, "Fresher").unwrap();
        assert_eq!(wizard.value(FormField::OrganizationName), None);
    }

    #[test]
    fn test_submission_only_from_last_stage() {
        let mut wizard = IntakeWizard::default();
        assert!(wizard.submission().unwrap_err().is_validation());
        for _ in 0..3 {
            wizard.next();
        }
        assert!(wizard.submission().is_ok());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut wizard = IntakeWizard::default();
        fill_basic(&mut wizard);
        wizard.next();
        wizard.set_field(FormField::Status, "Appearing").unwrap();

        wizard.reset();
        assert_eq!(wizard.stage(), WizardStage::Basic);
        assert_eq!(wizard.buffer(), &FormBuffer::new());
    }
}
