//! Dish repository for the `dish` table.
//!
//! Flavors live in their own table and are handled by `DishFlavorRepository`.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    dish::{DishFields, DishListFilter},
    status::SaleStatus,
};

/// Repository providing database operations for dishes.
pub struct DishRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DishRepository<'a, C> {
    /// Creates a new DishRepository on a pool or a transaction.
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new dish stamped with the creating employee.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created dish with generated ID
    /// - `Err(DbErr)` - Database error during insert operation
    pub async fn create(
        &self,
        fields: DishFields,
        status: SaleStatus,
        employee_id: i32,
    ) -> Result<entity::dish::Model, DbErr> {
        let now = Utc::now();

        entity::dish::ActiveModel {
            name: ActiveValue::Set(fields.name),
            category_id: ActiveValue::Set(fields.category_id),
            price: ActiveValue::Set(fields.price),
            image: ActiveValue::Set(fields.image),
            description: ActiveValue::Set(fields.description),
            status: ActiveValue::Set(status.as_i32()),
            create_time: ActiveValue::Set(now),
            update_time: ActiveValue::Set(now),
            create_user: ActiveValue::Set(employee_id),
            update_user: ActiveValue::Set(employee_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a dish by ID.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::dish::Model>, DbErr> {
        entity::prelude::Dish::find_by_id(id).one(self.db).await
    }

    /// Gets one page of dishes, most recently updated first.
    ///
    /// # Arguments
    /// - `name` - Optional substring the dish name must contain
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of dishes per page, must be greater than zero
    ///
    /// # Returns
    /// - `Ok((dishes, total))` - Dishes on the page and total matching count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated(
        &self,
        name: Option<&str>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::dish::Model>, u64), DbErr> {
        let mut query = entity::prelude::Dish::find();
        if let Some(name) = name.filter(|n| !n.is_empty()) {
            query = query.filter(entity::dish::Column::Name.contains(name));
        }

        let paginator = query
            .order_by_desc(entity::dish::Column::UpdateTime)
            .order_by_desc(entity::dish::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let dishes = paginator.fetch_page(page).await?;

        Ok((dishes, total))
    }

    /// Gets dishes matching the catalog filter, most recently updated first.
    ///
    /// Filters by name substring when a non-empty name is given, otherwise by category.
    /// Only dishes in the requested status are returned, on-sale by default.
    pub async fn get_by_filter(
        &self,
        filter: &DishListFilter,
    ) -> Result<Vec<entity::dish::Model>, DbErr> {
        let status = filter.status.unwrap_or(SaleStatus::OnSale);

        let mut query = entity::prelude::Dish::find()
            .filter(entity::dish::Column::Status.eq(status.as_i32()));

        match (filter.name.as_deref(), filter.category_id) {
            (Some(name), _) if !name.is_empty() => {
                query = query.filter(entity::dish::Column::Name.contains(name));
            }
            (_, Some(category_id)) => {
                query = query.filter(entity::dish::Column::CategoryId.eq(category_id));
            }
            _ => {}
        }

        query
            .order_by_desc(entity::dish::Column::UpdateTime)
            .order_by_desc(entity::dish::Column::Id)
            .all(self.db)
            .await
    }

    /// Overwrites the base fields of a dish.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The updated dish
    /// - `Ok(None)` - No dish exists with the specified ID
    /// - `Err(DbErr)` - Database error during update operation
    pub async fn update(
        &self,
        id: i32,
        fields: DishFields,
        status: Option<SaleStatus>,
        employee_id: i32,
    ) -> Result<Option<entity::dish::Model>, DbErr> {
        let Some(dish) = entity::prelude::Dish::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::dish::ActiveModel = dish.into();
        active_model.name = ActiveValue::Set(fields.name);
        active_model.category_id = ActiveValue::Set(fields.category_id);
        active_model.price = ActiveValue::Set(fields.price);
        active_model.image = ActiveValue::Set(fields.image);
        active_model.description = ActiveValue::Set(fields.description);
        if let Some(status) = status {
            active_model.status = ActiveValue::Set(status.as_i32());
        }
        active_model.update_time = ActiveValue::Set(Utc::now());
        active_model.update_user = ActiveValue::Set(employee_id);

        let dish = active_model.update(self.db).await?;

        Ok(Some(dish))
    }

    /// Sets the status of every listed dish in a single statement.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows updated, 0 for an empty id list
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_status_by_ids(
        &self,
        status: SaleStatus,
        ids: &[i32],
        employee_id: i32,
    ) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::Dish::update_many()
            .col_expr(entity::dish::Column::Status, Expr::value(status.as_i32()))
            .col_expr(entity::dish::Column::UpdateTime, Expr::value(Utc::now()))
            .col_expr(entity::dish::Column::UpdateUser, Expr::value(employee_id))
            .filter(entity::dish::Column::Id.is_in(ids.to_vec()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Gets the names of listed dishes that are currently on sale, ordered by ID.
    pub async fn get_on_sale_names(&self, ids: &[i32]) -> Result<Vec<String>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let dishes = entity::prelude::Dish::find()
            .filter(entity::dish::Column::Id.is_in(ids.to_vec()))
            .filter(entity::dish::Column::Status.eq(SaleStatus::OnSale.as_i32()))
            .order_by_asc(entity::dish::Column::Id)
            .all(self.db)
            .await?;

        Ok(dishes.into_iter().map(|d| d.name).collect())
    }

    /// Deletes every listed dish.
    ///
    /// Flavors must be removed separately or through the cascading foreign key.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of dishes deleted
    /// - `Err(DbErr)` - Database error during delete operation
    pub async fn delete_by_ids(&self, ids: &[i32]) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::Dish::delete_many()
            .filter(entity::dish::Column::Id.is_in(ids.to_vec()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
