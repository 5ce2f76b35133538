use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A dish included in a combo, with the name and price captured when linked.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SetmealDishDto {
    pub id: i32,
    pub setmeal_id: i32,
    pub dish_id: i32,
    pub name: String,
    pub price: i64,
    pub copies: i32,
}

/// A combo with its constituent dishes and the display name of its category.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SetmealDto {
    pub id: i32,
    pub name: String,
    pub category_id: i32,
    pub category_name: Option<String>,
    pub price: i64,
    pub image: String,
    pub description: Option<String>,
    pub status: i32,
    pub update_time: DateTime<Utc>,
    pub setmeal_dishes: Vec<SetmealDishDto>,
}

/// Constituent dish submitted as part of a combo create or update.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SetmealDishInputDto {
    pub dish_id: i32,
    pub name: String,
    pub price: i64,
    #[serde(default = "default_copies")]
    pub copies: i32,
}

fn default_copies() -> i32 {
    1
}

/// Payload for creating a combo.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateSetmealDto {
    pub name: String,
    pub category_id: i32,
    pub price: i64,
    #[serde(default)]
    pub image: String,
    pub description: Option<String>,
    pub status: Option<i32>,
    #[serde(default)]
    pub setmeal_dishes: Vec<SetmealDishInputDto>,
}

/// Payload for updating a combo. The submitted dishes replace all existing links.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSetmealDto {
    pub id: i32,
    pub name: String,
    pub category_id: i32,
    pub price: i64,
    #[serde(default)]
    pub image: String,
    pub description: Option<String>,
    pub status: Option<i32>,
    #[serde(default)]
    pub setmeal_dishes: Vec<SetmealDishInputDto>,
}
