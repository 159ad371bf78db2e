//! Employee directory use case.
//!
//! Listing, lookup, removal and full-record replacement of employees, plus
//! the read-only self view of a signed-in employee.

use std::sync::Arc;

use serde::Serialize;

use hrdesk_core::employee::{Employee, EmployeeRepository};
use hrdesk_core::session::{Role, User};
use hrdesk_core::{HrError, Result};

/// One line of the HR dashboard table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRow {
    pub id: String,
    pub initial: Option<char>,
    pub name: String,
    pub username: String,
    pub designation: String,
    pub email: String,
    pub phone: String,
}

impl From<&Employee> for EmployeeRow {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id.clone(),
            initial: employee.initial(),
            name: employee.employee_name.clone(),
            username: employee.username.clone(),
            designation: employee.designation.clone(),
            email: employee.email_id.clone(),
            phone: employee.phone_number.clone(),
        }
    }
}

pub struct EmployeeDirectory {
    employees: Arc<dyn EmployeeRepository>,
}

impl EmployeeDirectory {
    pub fn new(employees: Arc<dyn EmployeeRepository>) -> Self {
        Self { employees }
    }

    /// All records in insertion order.
    pub async fn list(&self) -> Result<Vec<Employee>> {
        self.employees.list_all().await
    }

    /// Dashboard rows in insertion order.
    pub async fn rows(&self) -> Result<Vec<EmployeeRow>> {
        let employees = self.employees.list_all().await?;
        Ok(employees.iter().map(EmployeeRow::from).collect())
    }

    pub async fn get(&self, employee_id: &str) -> Result<Employee> {
        self.employees
            .find_by_id(employee_id)
            .await?
            .ok_or_else(|| HrError::not_found("Employee", employee_id))
    }

    /// Removes an employee after a non-blank reason has been given.
    ///
    /// The reason is written to the log only; it is not stored with any
    /// record. Returns the removed record.
    pub async fn delete(&self, employee_id: &str, reason: &str) -> Result<Employee> {
        let reason = reason.trim();
        if reason.is_empty() {
            return Err(HrError::validation("a reason is required to delete an employee"));
        }

        let employee = self.get(employee_id).await?;
        if !self.employees.delete(employee_id).await? {
            // removed by another writer between lookup and delete
            return Err(HrError::not_found("Employee", employee_id));
        }

        tracing::info!(
            employee_id = %employee.id,
            reason = %reason,
            "Employee deleted"
        );
        Ok(employee)
    }

    /// Replaces an existing record wholesale. No field-level merge.
    pub async fn overwrite(&self, employee: &Employee) -> Result<()> {
        if self.employees.find_by_id(&employee.id).await?.is_none() {
            return Err(HrError::not_found("Employee", employee.id.clone()));
        }
        self.employees.save(employee).await?;
        tracing::info!(employee_id = %employee.id, "Employee record replaced");
        Ok(())
    }

    /// The signed-in employee's own record.
    pub async fn own_profile(&self, user: &User) -> Result<Employee> {
        let employee_id = match (&user.role, &user.employee_id) {
            (Role::Employee, Some(employee_id)) => employee_id,
            _ => {
                return Err(HrError::unauthorized(
                    "only a signed-in employee has an own profile",
                ));
            }
        };
        self.get(employee_id).await
    }
}
