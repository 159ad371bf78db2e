//! Employee intake use case.
//!
//! Turns a completed `IntakeWizard` into a stored `Employee`.

use std::sync::Arc;

use hrdesk_core::Result;
use hrdesk_core::clock::{Clock, RecordIdGenerator, to_timestamp};
use hrdesk_core::credential::CredentialHasher;
use hrdesk_core::employee::{Employee, EmployeeRepository};
use hrdesk_core::wizard::{HiddenFieldPolicy, IntakeWizard};

pub struct IntakeService {
    employees: Arc<dyn EmployeeRepository>,
    hasher: Arc<dyn CredentialHasher>,
    clock: Arc<dyn Clock>,
    ids: RecordIdGenerator,
    policy: HiddenFieldPolicy,
}

impl IntakeService {
    pub fn new(
        employees: Arc<dyn EmployeeRepository>,
        hasher: Arc<dyn CredentialHasher>,
        clock: Arc<dyn Clock>,
        policy: HiddenFieldPolicy,
    ) -> Self {
        Self {
            employees,
            hasher,
            clock,
            ids: RecordIdGenerator::new(),
            policy,
        }
    }

    /// A fresh wizard using the configured hidden-field policy.
    pub fn start(&self) -> IntakeWizard {
        IntakeWizard::new(self.policy)
    }

    /// Submits the wizard from its last stage.
    ///
    /// Assigns `id` and `createdAt`, hashes the entered password, stores the
    /// record, then resets the wizard to stage 1 with default choices. An id
    /// already taken in the store (another writer got there first) is
    /// skipped for the next generated one. If any step fails the wizard is
    /// left exactly as it was.
    pub async fn submit(&self, wizard: &mut IntakeWizard) -> Result<Employee> {
        let buffer = wizard.submission()?;

        let password_hash = match buffer.password() {
            Some(password) if !password.is_empty() => self.hasher.hash(password)?,
            _ => String::new(),
        };

        let now = self.clock.now();
        let created_at = to_timestamp(now);
        let employee = loop {
            let id = self.ids.next_id(now);
            let employee = buffer.to_employee(id, created_at.as_str(), password_hash.as_str());
            match self.employees.insert(&employee).await {
                Ok(()) => break employee,
                Err(e) if e.is_already_exists() => {
                    tracing::debug!(employee_id = %employee.id, "Generated id already taken, retrying");
                }
                Err(e) => return Err(e),
            }
        };
        wizard.reset();

        tracing::info!(
            employee_id = %employee.id,
            experience_type = %employee.experience_type,
            "Employee added"
        );
        Ok(employee)
    }
}
