//! Employee rule set
//!
//! Every rule runs on every candidate and all failures are collected,
//! including several for the same field.

use super::validators::{
    char_length, contains_char, date_before, email_address, in_range, matches_pattern, non_zero,
    not_blank, present,
};
use super::ValidationReport;
use crate::core::employee::{EmployeeFields, ValidatedFields};
use crate::core::error::{FieldValidationError, ValidationError};
use chrono::{Datelike, Local, NaiveDate};
use regex::Regex;
use std::sync::OnceLock;

pub const NAME_REQUIRED: &str = "Name is required";
pub const NAME_LENGTH: &str = "Name must be between 3 and 10 characters";
pub const SURNAME_REQUIRED: &str = "Surname is required";
pub const SURNAME_LENGTH: &str = "Surname must be between 3 and 15 characters";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_AT_SIGN: &str = "Email must contain '@' character";
pub const EMAIL_INVALID: &str = "Invalid Email Address";
pub const PHONE_REQUIRED: &str = "Phone number is required";
pub const PHONE_FORMAT: &str = "Invalid phone number format. Must be 10-15 digits.";
pub const ADDRESS_REQUIRED: &str = "Address is required";
pub const AGE_REQUIRED: &str = "Age is required.";
pub const AGE_RANGE: &str = "Age must be between 18 and 60";
pub const DATE_OF_BIRTH_REQUIRED: &str = "Date of Birth is required";
pub const DATE_OF_BIRTH_FUTURE: &str = "Date of Birth cannot be in the future";
pub const AGE_MISMATCH: &str = "Age must match the calculated age based on Date of Birth";

fn phone_pattern() -> &'static Regex {
    static PHONE_REGEX: OnceLock<Regex> = OnceLock::new();
    // ASCII digits only; `\d` would also accept other Unicode digits
    PHONE_REGEX.get_or_init(|| Regex::new(r"^[0-9]{10,15}$").expect("phone pattern compiles"))
}

/// Age in whole years on `today` for someone born on `date_of_birth`
///
/// One year is subtracted when this year's birthday has not happened yet.
/// Someone born on 29 February turns a year older on 1 March in common years.
pub fn calculated_age(date_of_birth: NaiveDate, today: NaiveDate) -> i32 {
    let age = today.year() - date_of_birth.year();
    if (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day()) {
        age - 1
    } else {
        age
    }
}

/// Validator for employee candidates
///
/// Uses the local system date as "today" unless pinned to a fixed date.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmployeeValidator {
    today: Option<NaiveDate>,
}

impl EmployeeValidator {
    /// Validator that reads the local date at every call
    pub fn new() -> Self {
        Self { today: None }
    }

    /// Validator that always treats `today` as the current date
    pub fn pinned(today: NaiveDate) -> Self {
        Self { today: Some(today) }
    }

    /// The date the rules are evaluated against
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Run every rule and return all failures; empty means valid
    pub fn validate(&self, candidate: &EmployeeFields) -> Vec<FieldValidationError> {
        self.report(candidate).into_errors()
    }

    fn report(&self, candidate: &EmployeeFields) -> ValidationReport {
        let today = self.today();
        let mut report = ValidationReport::default();

        report.check("name", not_blank(&candidate.name, NAME_REQUIRED));
        report.check("name", char_length(&candidate.name, 3, 10, NAME_LENGTH));

        report.check("surname", not_blank(&candidate.surname, SURNAME_REQUIRED));
        report.check("surname", char_length(&candidate.surname, 3, 15, SURNAME_LENGTH));

        report.check("email", not_blank(&candidate.email, EMAIL_REQUIRED));
        report.check("email", contains_char(&candidate.email, '@', EMAIL_AT_SIGN));
        report.check("email", email_address(&candidate.email, EMAIL_INVALID));

        report.check("phone", not_blank(&candidate.phone, PHONE_REQUIRED));
        report.check(
            "phone",
            matches_pattern(&candidate.phone, phone_pattern(), PHONE_FORMAT),
        );

        report.check("address", not_blank(&candidate.address, ADDRESS_REQUIRED));

        report.check("age", non_zero(candidate.age, AGE_REQUIRED));
        report.check("age", in_range(candidate.age, 18, 60, AGE_RANGE));

        report.check(
            "dateOfBirth",
            present(candidate.date_of_birth.as_ref(), DATE_OF_BIRTH_REQUIRED),
        );
        report.check(
            "dateOfBirth",
            date_before(candidate.date_of_birth, today, DATE_OF_BIRTH_FUTURE),
        );

        // Cross-field rule, evaluated even when the age or date rules failed
        let age_matches = candidate
            .date_of_birth
            .is_some_and(|dob| calculated_age(dob, today) == candidate.age);
        if !age_matches {
            report.fail("age", AGE_MISMATCH);
        }

        report
    }

    /// Validate and, on success, hand back the checked field set
    pub fn check(&self, candidate: EmployeeFields) -> Result<ValidatedFields, ValidationError> {
        let report = self.report(&candidate);

        match candidate.date_of_birth {
            Some(date_of_birth) if report.is_valid() => Ok(ValidatedFields {
                name: candidate.name,
                surname: candidate.surname,
                email: candidate.email,
                phone: candidate.phone,
                address: candidate.address,
                age: candidate.age,
                date_of_birth,
            }),
            _ => Err(ValidationError::FieldErrors(report.into_errors())),
        }
    }
}
