//! Validation system
//!
//! Field validators are small pure functions; a rule set composes them and
//! a [`ValidationReport`] collects every failure instead of stopping at the
//! first one.

pub mod employee;
pub mod validators;

pub use employee::{EmployeeValidator, calculated_age};

use crate::core::error::FieldValidationError;

/// Accumulates field-level failures
#[derive(Debug, Default)]
pub struct ValidationReport {
    errors: Vec<FieldValidationError>,
}

impl ValidationReport {
    /// Record the outcome of a validator against `field`
    pub fn check(&mut self, field: &str, outcome: Result<(), String>) {
        if let Err(message) = outcome {
            self.errors.push(FieldValidationError {
                field: field.to_string(),
                message,
            });
        }
    }

    /// Record an unconditional failure against `field`
    pub fn fail(&mut self, field: &str, message: &str) {
        self.check(field, Err(message.to_string()));
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_errors(self) -> Vec<FieldValidationError> {
        self.errors
    }
}
