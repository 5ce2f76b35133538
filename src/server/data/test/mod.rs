use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::model::status::SaleStatus;

mod dish;
mod dish_flavor;
mod employee;
mod setmeal;
mod setmeal_dish;
