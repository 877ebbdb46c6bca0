//! Filtering and sorting of employee listings
//!
//! # Example
//! ```rust,ignore
//! // GET /api/employees/list-filtered?name=an&sortField=age&sortOrder=desc
//! let query = EmployeeQuery {
//!     name: Some("an".into()),
//!     sort_field: Some("age".into()),
//!     sort_order: Some("desc".into()),
//! };
//! let employees = query.apply(store.list_all().await?);
//! ```

use crate::core::employee::Employee;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Query parameters for the filtered listing
///
/// All parameters are optional. Sorting only applies when both
/// `sort_field` and `sort_order` are non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeQuery {
    /// Case-insensitive substring the name must contain
    pub name: Option<String>,

    /// `name`, `age` or `email`, case-insensitive
    pub sort_field: Option<String>,

    /// `asc` (case-insensitive) for ascending; any other value sorts descending
    pub sort_order: Option<String>,
}

/// Field a listing can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    Age,
    Email,
}

impl SortField {
    /// Parse a field token; unknown tokens give `None`
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "name" => Some(SortField::Name),
            "age" => Some(SortField::Age),
            "email" => Some(SortField::Email),
            _ => None,
        }
    }

    fn compare(self, a: &Employee, b: &Employee) -> Ordering {
        match self {
            SortField::Name => case_folded(&a.name, &b.name),
            SortField::Age => a.age.cmp(&b.age),
            SortField::Email => case_folded(&a.email, &b.email),
        }
    }
}

/// Case-insensitive order, byte order only between case variants
fn case_folded(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Direction of a sort
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    /// `asc` in any case is ascending, everything else descending
    pub fn parse(token: &str) -> Self {
        if token.eq_ignore_ascii_case("asc") {
            SortOrder::Ascending
        } else {
            SortOrder::Descending
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl EmployeeQuery {
    /// The requested ordering, if any
    ///
    /// `None` when either token is missing or the field is not recognised.
    pub fn ordering(&self) -> Option<(SortField, SortOrder)> {
        let field = non_empty(&self.sort_field)?;
        let order = non_empty(&self.sort_order)?;
        Some((SortField::parse(field)?, SortOrder::parse(order)))
    }

    /// Filter then sort `employees`
    ///
    /// The sort is stable: ties keep their relative order from the input.
    pub fn apply(&self, mut employees: Vec<Employee>) -> Vec<Employee> {
        if let Some(needle) = non_empty(&self.name) {
            let needle = needle.to_lowercase();
            employees.retain(|e| e.name.to_lowercase().contains(&needle));
        }

        if let Some((field, order)) = self.ordering() {
            match order {
                SortOrder::Ascending => employees.sort_by(|a, b| field.compare(a, b)),
                SortOrder::Descending => employees.sort_by(|a, b| field.compare(b, a)),
            }
        }

        employees
    }
}
