//! Dish domain models and parameters.
//!
//! A dish is stored as one `dish` row plus any number of `dish_flavor` rows. The
//! aggregate view `DishWithFlavors` is composed by the service from those pieces and
//! the display name of the dish's category.

use sea_orm::DbErr;

use crate::{
    model::dish::{CreateDishDto, DishDto, DishFlavorDto, DishFlavorInputDto, UpdateDishDto},
    server::{error::AppError, model::status::SaleStatus},
};

/// A flavor with its option list decoded from the JSON column.
#[derive(Debug, Clone, PartialEq)]
pub struct DishFlavor {
    pub id: i32,
    pub dish_id: i32,
    pub name: String,
    pub options: Vec<String>,
}

impl DishFlavor {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(DishFlavor)` - Option list decoded successfully
    /// - `Err(DbErr::Custom)` - The stored value is not a JSON array of strings
    pub fn from_entity(entity: entity::dish_flavor::Model) -> Result<Self, DbErr> {
        let options = serde_json::from_str::<Vec<String>>(&entity.value).map_err(|e| {
            DbErr::Custom(format!(
                "Failed to decode options of flavor {}: {}",
                entity.id, e
            ))
        })?;

        Ok(Self {
            id: entity.id,
            dish_id: entity.dish_id,
            name: entity.name,
            options,
        })
    }

    pub fn into_dto(self) -> DishFlavorDto {
        DishFlavorDto {
            id: self.id,
            dish_id: self.dish_id,
            name: self.name,
            value: self.options,
        }
    }
}

/// Flavor to insert for a dish. The dish id is stamped by the repository.
#[derive(Debug, Clone, PartialEq)]
pub struct DishFlavorParams {
    pub name: String,
    pub options: Vec<String>,
}

impl DishFlavorParams {
    pub fn from_dto(dto: DishFlavorInputDto) -> Self {
        Self {
            name: dto.name,
            options: dto.value,
        }
    }
}

/// Base dish fields shared by create and update.
#[derive(Debug, Clone)]
pub struct DishFields {
    pub name: String,
    pub category_id: i32,
    pub price: i64,
    pub image: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CreateDishParams {
    pub fields: DishFields,
    pub status: SaleStatus,
    pub flavors: Vec<DishFlavorParams>,
}

impl CreateDishParams {
    /// Converts the request payload, defaulting the status to on-sale.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Status other than 0 or 1
    pub fn from_dto(dto: CreateDishDto) -> Result<Self, AppError> {
        let status = match dto.status {
            Some(value) => SaleStatus::try_from(value)?,
            None => SaleStatus::OnSale,
        };

        Ok(Self {
            fields: DishFields {
                name: dto.name,
                category_id: dto.category_id,
                price: dto.price,
                image: dto.image,
                description: dto.description,
            },
            status,
            flavors: dto
                .flavors
                .into_iter()
                .map(DishFlavorParams::from_dto)
                .collect(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct UpdateDishParams {
    pub id: i32,
    pub fields: DishFields,
    /// `None` keeps the stored status.
    pub status: Option<SaleStatus>,
    /// Replaces the full flavor set of the dish.
    pub flavors: Vec<DishFlavorParams>,
}

impl UpdateDishParams {
    pub fn from_dto(dto: UpdateDishDto) -> Result<Self, AppError> {
        let status = dto.status.map(SaleStatus::try_from).transpose()?;

        Ok(Self {
            id: dto.id,
            fields: DishFields {
                name: dto.name,
                category_id: dto.category_id,
                price: dto.price,
                image: dto.image,
                description: dto.description,
            },
            status,
            flavors: dto
                .flavors
                .into_iter()
                .map(DishFlavorParams::from_dto)
                .collect(),
        })
    }
}

/// Filter for the catalog listing of dishes.
///
/// When both are given the name filter wins.
#[derive(Debug, Clone, Default)]
pub struct DishListFilter {
    pub category_id: Option<i32>,
    pub name: Option<String>,
    /// Defaults to on-sale.
    pub status: Option<SaleStatus>,
}

/// A dish together with its flavors and category name.
#[derive(Debug, Clone)]
pub struct DishWithFlavors {
    pub dish: entity::dish::Model,
    pub flavors: Vec<DishFlavor>,
    /// `None` when the category row does not exist.
    pub category_name: Option<String>,
}

impl DishWithFlavors {
    pub fn into_dto(self) -> DishDto {
        DishDto {
            id: self.dish.id,
            name: self.dish.name,
            category_id: self.dish.category_id,
            category_name: self.category_name,
            price: self.dish.price,
            image: self.dish.image,
            description: self.dish.description,
            status: self.dish.status,
            update_time: self.dish.update_time,
            flavors: self.flavors.into_iter().map(DishFlavor::into_dto).collect(),
        }
    }
}
