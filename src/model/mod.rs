//! Wire-level data transfer objects.
//!
//! Every type here is serialized with camelCase field names and documented for the
//! OpenAPI schema. Server-side domain models convert into these at the controller
//! boundary through their `into_dto` methods.

pub mod api;
pub mod dish;
pub mod employee;
pub mod setmeal;
