//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let category = factory::create_category(&db).await?;
//! let dish = factory::create_dish(&db, category.id).await?;
//!
//! let (category, dish, flavors) = factory::helpers::create_dish_with_flavors(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let dish = factory::dish::DishFactory::new(&db, category.id)
//!     .name("Kung Pao Chicken")
//!     .status(0)
//!     .build()
//!     .await?;
//! ```

pub mod category;
pub mod dish;
pub mod dish_flavor;
pub mod employee;
pub mod helpers;
pub mod setmeal;
pub mod setmeal_dish;

pub use category::create_category;
pub use dish::create_dish;
pub use dish_flavor::create_dish_flavor;
pub use employee::create_employee;
pub use setmeal::create_setmeal;
pub use setmeal_dish::create_setmeal_dish;
