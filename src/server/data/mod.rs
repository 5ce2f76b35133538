//! Database repository layer for all domain entities.
//!
//! Repositories handle single-table database operations and are generic over
//! `ConnectionTrait`, so services can run several of them inside one transaction
//! by passing a `DatabaseTransaction` instead of the pool.

pub mod category;
pub mod dish;
pub mod dish_flavor;
pub mod employee;
pub mod setmeal;
pub mod setmeal_dish;

#[cfg(test)]
mod test;
