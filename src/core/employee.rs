//! Employee record model
//!
//! Three shapes of the same entity live here:
//!
//! - [`Employee`]: a stored record, always carrying an id
//! - [`EmployeeFields`]: a candidate field set coming from a request, not yet validated
//! - [`EmployeePatch`]: the subset of fields a partial update may touch

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier assigned by the store
pub type EmployeeId = i32;

/// A stored employee record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub age: i32,
    #[serde(with = "date_format")]
    pub date_of_birth: NaiveDate,
}

impl Employee {
    /// Create a record from fields that already passed validation
    pub fn new(id: EmployeeId, fields: ValidatedFields) -> Self {
        let ValidatedFields {
            name,
            surname,
            email,
            phone,
            address,
            age,
            date_of_birth,
        } = fields;

        Self {
            id,
            name,
            surname,
            email,
            phone,
            address,
            age,
            date_of_birth,
        }
    }

    /// Overwrite every field except the id
    pub fn replace_with(&mut self, fields: ValidatedFields) {
        let id = self.id;
        *self = Self::new(id, fields);
    }

    /// Overwrite each field the patch carries, leaving the others alone
    ///
    /// No validation happens here; callers decide which values reach this point.
    pub fn apply_patch(&mut self, patch: EmployeePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
    }
}

/// Candidate field set for create and replace
///
/// Every field is optional on the wire. Missing text becomes empty and a
/// missing age becomes zero so the validator reports them as required
/// instead of the request failing to parse. Keys are read in camelCase or
/// PascalCase.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeFields {
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(alias = "Surname")]
    pub surname: String,
    #[serde(alias = "Email")]
    pub email: String,
    #[serde(alias = "Phone")]
    pub phone: String,
    #[serde(alias = "Address")]
    pub address: String,
    #[serde(alias = "Age")]
    pub age: i32,
    #[serde(
        alias = "DateOfBirth",
        with = "date_format::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_of_birth: Option<NaiveDate>,
}

/// Field set that passed the validator
///
/// Only `EmployeeValidator::check` builds one, so holding it means every
/// rule was satisfied at check time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedFields {
    pub(crate) name: String,
    pub(crate) surname: String,
    pub(crate) email: String,
    pub(crate) phone: String,
    pub(crate) address: String,
    pub(crate) age: i32,
    pub(crate) date_of_birth: NaiveDate,
}

/// Partial update of name, email and phone
///
/// `None` means "not supplied". `Some(String::new())` is an explicit empty
/// value, which the two partial update paths treat differently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EmployeePatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl EmployeePatch {
    /// Drop supplied values that are empty strings
    pub fn non_empty(self) -> Self {
        let keep = |value: Option<String>| value.filter(|v| !v.is_empty());

        Self {
            name: keep(self.name),
            email: keep(self.email),
            phone: keep(self.phone),
        }
    }

    /// Whether the patch would change nothing
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_none()
    }
}

/// Serde helpers for the date of birth
///
/// Dates are written as `YYYY-MM-DD`. On input a full date-time
/// (`2000-05-15T00:00:00`, with or without an offset) is also accepted and
/// truncated to its date.
pub mod date_format {
    use chrono::{DateTime, NaiveDate, NaiveDateTime};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn parse(raw: &str) -> Option<NaiveDate> {
        let raw = raw.trim();
        NaiveDate::parse_from_str(raw, FORMAT)
            .ok()
            .or_else(|| raw.parse::<NaiveDateTime>().ok().map(|dt| dt.date()))
            .or_else(|| {
                DateTime::parse_from_rfc3339(raw)
                    .ok()
                    .map(|dt| dt.date_naive())
            })
    }

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| D::Error::custom(format!("invalid date '{}'", raw)))
    }

    pub mod option {
        use chrono::NaiveDate;
        use serde::{Deserialize, Deserializer, Serializer, de::Error};

        pub fn serialize<S: Serializer>(
            date: &Option<NaiveDate>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match date {
                Some(date) => super::serialize(date, serializer),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<NaiveDate>, D::Error> {
            match Option::<String>::deserialize(deserializer)? {
                None => Ok(None),
                Some(raw) if raw.trim().is_empty() => Ok(None),
                Some(raw) => super::parse(&raw)
                    .map(Some)
                    .ok_or_else(|| D::Error::custom(format!("invalid date '{}'", raw))),
            }
        }
    }
}
