//! Domain models and operation parameters.
//!
//! Repositories return these types instead of raw entity models where a conversion is
//! needed (flavor option lists are decoded from JSON here), and services compose them
//! into the aggregate views returned to controllers.

pub mod dish;
pub mod employee;
pub mod page;
pub mod setmeal;
pub mod status;
