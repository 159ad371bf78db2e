//! KvStore-based EmployeeRepository implementation.

use async_trait::async_trait;
use hrdesk_core::employee::{Employee, EmployeeRepository};
use hrdesk_core::error::{HrError, Result};
use std::path::Path;

use crate::storage::{AtomicJsonFile, EMPLOYEES_KEY, KvStore, run_blocking};

/// Employee collection persisted as one JSON array under `employees`.
///
/// Reads decode the whole array. Writes run as a locked transaction
/// (load, mutate, atomic rewrite), so two writers cannot lose each other's
/// updates.
#[derive(Debug, Clone)]
pub struct JsonEmployeeRepository {
    file: AtomicJsonFile<Vec<Employee>>,
}

impl JsonEmployeeRepository {
    pub fn new(store: &KvStore) -> Self {
        Self {
            file: store.file(EMPLOYEES_KEY),
        }
    }

    /// Repository over a store rooted at `dir` (for testing).
    pub fn with_dir(dir: &Path) -> Self {
        Self::new(&KvStore::new(dir))
    }
}

#[async_trait]
impl EmployeeRepository for JsonEmployeeRepository {
    async fn list_all(&self) -> Result<Vec<Employee>> {
        let file = self.file.clone();
        run_blocking(move || {
            let employees = file.load().map_err(|e| {
                tracing::warn!("Failed to read {:?}: {}", file.path(), e);
                e
            })?;
            Ok(employees.unwrap_or_default())
        })
        .await
    }

    async fn find_by_id(&self, employee_id: &str) -> Result<Option<Employee>> {
        let employees = self.list_all().await?;
        Ok(employees.into_iter().find(|e| e.id == employee_id))
    }

    async fn save(&self, employee: &Employee) -> Result<()> {
        let file = self.file.clone();
        let employee = employee.clone();
        run_blocking(move || {
            let replaced = file.update(Vec::new(), |employees: &mut Vec<Employee>| {
                match employees.iter().position(|e| e.id == employee.id) {
                    Some(index) => {
                        employees[index] = employee.clone();
                        Ok(true)
                    }
                    None => {
                        employees.push(employee.clone());
                        Ok(false)
                    }
                }
            })?;
            tracing::debug!(
                employee_id = %employee.id,
                replaced,
                "Saved employee record"
            );
            Ok(())
        })
        .await
    }

    async fn insert(&self, employee: &Employee) -> Result<()> {
        let file = self.file.clone();
        let employee = employee.clone();
        run_blocking(move || {
            let inserted = file.update(Vec::new(), |employees: &mut Vec<Employee>| {
                if employees.iter().any(|e| e.id == employee.id) {
                    return Ok(false);
                }
                employees.push(employee.clone());
                Ok(true)
            })?;
            if !inserted {
                tracing::debug!(employee_id = %employee.id, "Employee id already taken");
                return Err(HrError::already_exists("Employee", employee.id));
            }
            tracing::debug!(employee_id = %employee.id, "Inserted employee record");
            Ok(())
        })
        .await
    }

    async fn delete(&self, employee_id: &str) -> Result<bool> {
        let file = self.file.clone();
        let employee_id = employee_id.to_string();
        run_blocking(move || {
            let removed = file.update(Vec::new(), |employees: &mut Vec<Employee>| {
                let before = employees.len();
                employees.retain(|e| e.id != employee_id);
                Ok(employees.len() != before)
            })?;
            tracing::debug!(employee_id = %employee_id, removed, "Deleted employee record");
            Ok(removed)
        })
        .await
    }
}
