//! Combo (setmeal) domain models and parameters.

use crate::{
    model::setmeal::{
        CreateSetmealDto, SetmealDishDto, SetmealDishInputDto, SetmealDto, UpdateSetmealDto,
    },
    server::{error::AppError, model::status::SaleStatus},
};

/// Dish link to insert for a combo. The combo id is stamped by the repository.
#[derive(Debug, Clone, PartialEq)]
pub struct SetmealDishParams {
    pub dish_id: i32,
    pub name: String,
    pub price: i64,
    pub copies: i32,
}

impl SetmealDishParams {
    pub fn from_dto(dto: SetmealDishInputDto) -> Self {
        Self {
            dish_id: dto.dish_id,
            name: dto.name,
            price: dto.price,
            copies: dto.copies,
        }
    }
}

/// Base combo fields shared by create and update.
#[derive(Debug, Clone)]
pub struct SetmealFields {
    pub name: String,
    pub category_id: i32,
    pub price: i64,
    pub image: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CreateSetmealParams {
    pub fields: SetmealFields,
    pub status: SaleStatus,
    pub dishes: Vec<SetmealDishParams>,
}

impl CreateSetmealParams {
    pub fn from_dto(dto: CreateSetmealDto) -> Result<Self, AppError> {
        let status = match dto.status {
            Some(value) => SaleStatus::try_from(value)?,
            None => SaleStatus::OnSale,
        };

        Ok(Self {
            fields: SetmealFields {
                name: dto.name,
                category_id: dto.category_id,
                price: dto.price,
                image: dto.image,
                description: dto.description,
            },
            status,
            dishes: dto
                .setmeal_dishes
                .into_iter()
                .map(SetmealDishParams::from_dto)
                .collect(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct UpdateSetmealParams {
    pub id: i32,
    pub fields: SetmealFields,
    pub status: Option<SaleStatus>,
    /// Replaces the full link set of the combo.
    pub dishes: Vec<SetmealDishParams>,
}

impl UpdateSetmealParams {
    pub fn from_dto(dto: UpdateSetmealDto) -> Result<Self, AppError> {
        let status = dto.status.map(SaleStatus::try_from).transpose()?;

        Ok(Self {
            id: dto.id,
            fields: SetmealFields {
                name: dto.name,
                category_id: dto.category_id,
                price: dto.price,
                image: dto.image,
                description: dto.description,
            },
            status,
            dishes: dto
                .setmeal_dishes
                .into_iter()
                .map(SetmealDishParams::from_dto)
                .collect(),
        })
    }
}

/// A combo together with its dish links and category name.
#[derive(Debug, Clone)]
pub struct SetmealWithDishes {
    pub setmeal: entity::setmeal::Model,
    pub dishes: Vec<entity::setmeal_dish::Model>,
    pub category_name: Option<String>,
}

impl SetmealWithDishes {
    pub fn into_dto(self) -> SetmealDto {
        SetmealDto {
            id: self.setmeal.id,
            name: self.setmeal.name,
            category_id: self.setmeal.category_id,
            category_name: self.category_name,
            price: self.setmeal.price,
            image: self.setmeal.image,
            description: self.setmeal.description,
            status: self.setmeal.status,
            update_time: self.setmeal.update_time,
            setmeal_dishes: self
                .dishes
                .into_iter()
                .map(|link| SetmealDishDto {
                    id: link.id,
                    setmeal_id: link.setmeal_id,
                    dish_id: link.dish_id,
                    name: link.name,
                    price: link.price,
                    copies: link.copies,
                })
                .collect(),
        }
    }
}
