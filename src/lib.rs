//! Roster - Interactive Employee Management CLI
//!
//! Roster manages a small relational dataset of departments, roles, and
//! employees (with a self-referential manager relationship). It presents a
//! menu, collects input via prompts, issues parameterized queries against a
//! SQLite store, and renders results as text tables.
//!
//! # Module Organization
//! - [`error`] - Error types and handling
//! - [`config`] - Database path resolution
//! - [`store`] - Data access layer (one statement per operation)
//! - [`menu`] - Interactive menu loop and prompts
//! - [`render`] - Tabular text output

pub mod config;
pub mod error;
pub mod menu;
pub mod render;
pub mod store;

// Re-export commonly used types for convenience
pub use error::{Result, RosterError};
pub use menu::Action;
pub use store::{Department, EmployeeListing, EmployeeRef, RoleListing, RoleRef, Store};
