//! Business logic layer.
//!
//! Services orchestrate repositories and own transaction boundaries. Every write that
//! touches a base row and its children runs inside one transaction, which rolls back
//! when dropped without a commit.

pub mod auth;
pub mod dish;
pub mod setmeal;

#[cfg(test)]
mod test;
