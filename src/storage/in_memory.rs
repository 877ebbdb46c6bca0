//! In-memory implementation of EmployeeService
//!
//! Records live in a `Vec` in insertion order behind a single
//! `tokio::sync::RwLock`. Id assignment and every write happen under the
//! write lock, so concurrent creates cannot pick the same id and readers
//! never see a half-applied update.

use crate::core::employee::{Employee, EmployeeFields, EmployeeId, EmployeePatch};
use crate::core::error::{ApiError, Result};
use crate::core::query::EmployeeQuery;
use crate::core::service::EmployeeService;
use crate::core::validation::EmployeeValidator;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory employee store
///
/// Cloning is cheap and every clone shares the same records.
#[derive(Clone, Default)]
pub struct InMemoryEmployeeStore {
    employees: Arc<RwLock<Vec<Employee>>>,
    validator: EmployeeValidator,
}

impl InMemoryEmployeeStore {
    /// Create an empty store validating against the local date
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with a specific validator
    pub fn with_validator(validator: EmployeeValidator) -> Self {
        Self {
            employees: Arc::new(RwLock::new(Vec::new())),
            validator,
        }
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.employees.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.employees.read().await.is_empty()
    }

    fn next_id(employees: &[Employee]) -> EmployeeId {
        employees.iter().map(|e| e.id).max().map_or(1, |max| max + 1)
    }

    fn find_mut(employees: &mut [Employee], id: EmployeeId) -> Result<&mut Employee> {
        employees
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| ApiError::not_found(id))
    }

    async fn patch(&self, id: EmployeeId, patch: EmployeePatch) -> Result<Employee> {
        let mut employees = self.employees.write().await;
        let employee = Self::find_mut(&mut employees, id)?;

        employee.apply_patch(patch);
        tracing::info!(employee_id = id, "Employee partially updated");

        Ok(employee.clone())
    }
}

#[async_trait]
impl EmployeeService for InMemoryEmployeeStore {
    async fn list_all(&self) -> Result<Vec<Employee>> {
        let employees = self.employees.read().await;
        Ok(employees.clone())
    }

    async fn get_by_id(&self, id: EmployeeId) -> Result<Employee> {
        let employees = self.employees.read().await;

        employees
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| ApiError::not_found(id))
    }

    async fn create(&self, fields: EmployeeFields) -> Result<Employee> {
        let fields = self.validator.check(fields).inspect_err(|e| {
            tracing::debug!(fields = ?e.fields(), "Employee creation rejected");
        })?;

        let mut employees = self.employees.write().await;
        let employee = Employee::new(Self::next_id(&employees), fields);
        employees.push(employee.clone());

        tracing::info!(employee_id = employee.id, "Employee created");
        Ok(employee)
    }

    async fn replace(&self, id: EmployeeId, fields: EmployeeFields) -> Result<Employee> {
        let mut employees = self.employees.write().await;
        let employee = Self::find_mut(&mut employees, id)?;

        let fields = self.validator.check(fields).inspect_err(|e| {
            tracing::debug!(employee_id = id, fields = ?e.fields(), "Employee replacement rejected");
        })?;

        employee.replace_with(fields);
        tracing::info!(employee_id = id, "Employee replaced");

        Ok(employee.clone())
    }

    async fn partial_update_validated(
        &self,
        id: EmployeeId,
        patch: EmployeePatch,
    ) -> Result<Employee> {
        self.patch(id, patch.non_empty()).await
    }

    async fn partial_update_untyped(
        &self,
        id: EmployeeId,
        patch: EmployeePatch,
    ) -> Result<Employee> {
        self.patch(id, patch).await
    }

    async fn filter_sort(&self, query: &EmployeeQuery) -> Result<Vec<Employee>> {
        let all = self.list_all().await?;
        Ok(query.apply(all))
    }
}
