//! Core module containing the employee model, its rules and the service seam

pub mod employee;
pub mod error;
pub mod query;
pub mod service;
pub mod validation;

pub use employee::{Employee, EmployeeFields, EmployeeId, EmployeePatch, ValidatedFields};
pub use error::{ApiError, EntityError, FieldValidationError, RequestError, ValidationError};
pub use query::{EmployeeQuery, SortField, SortOrder};
pub use service::EmployeeService;
pub use validation::{EmployeeValidator, calculated_age};
