use super::*;
use crate::server::{
    data::setmeal_dish::SetmealDishRepository, model::setmeal::SetmealDishParams,
};

mod create_many;
mod delete_by_setmeal_ids;
