//! Employee repository trait.
//!
//! Defines the interface for employee persistence operations.

use super::model::Employee;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract repository for the employee collection.
///
/// Decouples use cases from the storage mechanism (JSON blob on disk,
/// in-memory fixture, ...).
///
/// # Implementation Notes
///
/// Implementations must:
/// - Preserve insertion order in `list_all`
/// - Treat a missing collection as empty
/// - Serialize concurrent read-modify-write cycles so no update is lost
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Lists all employees in insertion order.
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<Employee>)`: All stored employees (empty when none exist)
    /// - `Err(_)`: The stored collection could not be read or decoded
    async fn list_all(&self) -> Result<Vec<Employee>>;

    /// Finds an employee by its ID.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Employee))`: Employee found
    /// - `Ok(None)`: Employee not found
    /// - `Err(_)`: Error occurred during retrieval
    async fn find_by_id(&self, employee_id: &str) -> Result<Option<Employee>>;

    /// Upserts an employee keyed on `id`.
    ///
    /// Replaces the existing record in place when the id is known, appends
    /// otherwise. No field-level merge happens.
    async fn save(&self, employee: &Employee) -> Result<()>;

    /// Appends a new employee, failing when its id is already stored.
    ///
    /// The existence check and the write happen as one locked step, so two
    /// writers racing for the same id cannot both succeed.
    ///
    /// # Returns
    ///
    /// - `Ok(())`: The record was appended
    /// - `Err(HrError::AlreadyExists)`: The id is taken; nothing was written
    /// - `Err(_)`: Error occurred during the write
    async fn insert(&self, employee: &Employee) -> Result<()>;

    /// Deletes an employee by ID.
    ///
    /// # Returns
    ///
    /// - `Ok(true)`: A record was removed
    /// - `Ok(false)`: No record had this id
    /// - `Err(_)`: Error occurred during deletion
    async fn delete(&self, employee_id: &str) -> Result<bool>;
}
