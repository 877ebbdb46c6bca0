//! Storage implementations for the employee service

pub mod in_memory;

pub use in_memory::InMemoryEmployeeStore;
