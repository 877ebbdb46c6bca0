//! Server module: HTTP handlers, routes and the server builder
//!
//! The store knows nothing about HTTP; this module parses requests, calls
//! the `EmployeeService` and maps results and errors to responses.

pub mod builder;
pub mod handlers;
pub mod router;

pub use builder::ServerBuilder;
pub use handlers::AppState;
pub use router::{build_employee_routes, build_health_routes};
