use super::*;
use crate::server::{data::dish_flavor::DishFlavorRepository, model::dish::DishFlavorParams};

mod create_many;
mod delete_by_dish_ids;
mod get_by_dish_ids;

fn flavor(name: &str, options: &[&str]) -> DishFlavorParams {
    DishFlavorParams {
        name: name.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
    }
}
