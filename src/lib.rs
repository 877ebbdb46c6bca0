//! # Employee API
//!
//! An in-memory employee records service exposed over REST.
//!
//! ## Features
//!
//! - **Typed records**: [`core::Employee`] with a candidate type for input and a typed patch
//! - **Rule-based validation**: every rule runs, every failure is reported
//! - **Derived-value check**: age must match the date of birth as of today
//! - **Serialised store**: one lock around the collection, ids never collide
//! - **Typed errors**: not found, validation and malformed input map to distinct responses
//! - **Panic boundary**: unexpected failures become a generic 500 body
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use employee_api::prelude::*;
//!
//! let store = InMemoryEmployeeStore::new();
//! let employee = store
//!     .create(EmployeeFields {
//!         name: "Anna".into(),
//!         surname: "Smith".into(),
//!         email: "anna@example.com".into(),
//!         phone: "05551234567".into(),
//!         address: "12 Baker Street".into(),
//!         age: 34,
//!         date_of_birth: NaiveDate::from_ymd_opt(1990, 3, 10),
//!     })
//!     .await?;
//!
//! ServerBuilder::new()
//!     .with_service(store)
//!     .serve()
//!     .await?;
//! ```

pub mod config;
pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        ApiError, Employee, EmployeeFields, EmployeeId, EmployeePatch, EmployeeQuery,
        EmployeeService, EmployeeValidator, EntityError, FieldValidationError, RequestError,
        SortField, SortOrder, ValidationError, calculated_age,
    };

    // === Storage ===
    pub use crate::storage::InMemoryEmployeeStore;

    // === Config ===
    pub use crate::config::ServerConfig;

    // === Server ===
    pub use crate::server::{AppState, ServerBuilder};

    // === External dependencies ===
    pub use chrono::NaiveDate;
}
