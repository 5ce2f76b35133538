use super::*;
use crate::server::{
    data::dish::DishRepository,
    model::dish::{DishFields, DishListFilter},
};
use chrono::{Duration, Utc};

mod create;
mod delete_by_ids;
mod get_by_filter;
mod get_on_sale_names;
mod get_paginated;
mod update;
mod update_status_by_ids;

fn fields(name: &str, category_id: i32) -> DishFields {
    DishFields {
        name: name.to_string(),
        category_id,
        price: 2800,
        image: "dish.png".to_string(),
        description: Some("House special".to_string()),
    }
}
