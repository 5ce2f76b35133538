use super::*;
use crate::server::{data::setmeal::SetmealRepository, model::setmeal::SetmealFields};
use chrono::{Duration, Utc};

mod create;
mod delete_by_ids;
mod get_paginated;
mod update;
mod update_status_by_ids;

fn fields(name: &str, category_id: i32) -> SetmealFields {
    SetmealFields {
        name: name.to_string(),
        category_id,
        price: 5800,
        image: "combo.png".to_string(),
        description: None,
    }
}
