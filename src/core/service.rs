//! Service trait for employee operations

use crate::core::employee::{Employee, EmployeeFields, EmployeeId, EmployeePatch};
use crate::core::error::Result;
use crate::core::query::EmployeeQuery;
use async_trait::async_trait;

/// Service trait for managing employee records
///
/// Handlers only see this trait; the storage behind it is free to change.
/// Implementations must serialise mutations so that concurrent creates never
/// observe the same highest id.
#[async_trait]
pub trait EmployeeService: Send + Sync {
    /// Every record in store order
    async fn list_all(&self) -> Result<Vec<Employee>>;

    /// First record with this id
    async fn get_by_id(&self, id: EmployeeId) -> Result<Employee>;

    /// Validate, assign the next id and append
    async fn create(&self, fields: EmployeeFields) -> Result<Employee>;

    /// Validate and overwrite every field except the id
    async fn replace(&self, id: EmployeeId, fields: EmployeeFields) -> Result<Employee>;

    /// Apply the non-empty values of `patch` without validating them
    async fn partial_update_validated(
        &self,
        id: EmployeeId,
        patch: EmployeePatch,
    ) -> Result<Employee>;

    /// Apply every supplied value of `patch`, empty ones included, without validating them
    async fn partial_update_untyped(&self, id: EmployeeId, patch: EmployeePatch)
    -> Result<Employee>;

    /// Filtered and optionally sorted listing
    async fn filter_sort(&self, query: &EmployeeQuery) -> Result<Vec<Employee>>;
}
