use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A flavor attached to a dish, with its selectable options.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DishFlavorDto {
    pub id: i32,
    pub dish_id: i32,
    pub name: String,
    /// Selectable options, e.g. `["Mild", "Hot"]`.
    pub value: Vec<String>,
}

/// A dish with its flavors and the display name of its category.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DishDto {
    pub id: i32,
    pub name: String,
    pub category_id: i32,
    /// Absent when the category no longer exists.
    pub category_name: Option<String>,
    /// Price in minor currency units.
    pub price: i64,
    pub image: String,
    pub description: Option<String>,
    /// 1 = on-sale, 0 = off-sale.
    pub status: i32,
    pub update_time: DateTime<Utc>,
    pub flavors: Vec<DishFlavorDto>,
}

/// Flavor submitted as part of a dish create or update.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct DishFlavorInputDto {
    pub name: String,
    #[serde(default)]
    pub value: Vec<String>,
}

/// Payload for creating a dish.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateDishDto {
    pub name: String,
    pub category_id: i32,
    pub price: i64,
    #[serde(default)]
    pub image: String,
    pub description: Option<String>,
    /// Defaults to on-sale.
    pub status: Option<i32>,
    #[serde(default)]
    pub flavors: Vec<DishFlavorInputDto>,
}

/// Payload for updating a dish. The submitted flavors replace all existing ones.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDishDto {
    pub id: i32,
    pub name: String,
    pub category_id: i32,
    pub price: i64,
    #[serde(default)]
    pub image: String,
    pub description: Option<String>,
    /// Keeps the current status when omitted.
    pub status: Option<i32>,
    #[serde(default)]
    pub flavors: Vec<DishFlavorInputDto>,
}
