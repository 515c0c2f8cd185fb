//! Restaurant management back office.
//!
//! CRUD over the four restaurant resources (boards, bookings, employees,
//! products), exposed as a REST API backed by SQLite through sqlx.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::boards;
pub use modules::bookings;
pub use modules::employees;
pub use modules::products;
