//! Combo repository for the `setmeal` table.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{setmeal::SetmealFields, status::SaleStatus};

/// Repository providing database operations for combos.
pub struct SetmealRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SetmealRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new combo stamped with the creating employee.
    pub async fn create(
        &self,
        fields: SetmealFields,
        status: SaleStatus,
        employee_id: i32,
    ) -> Result<entity::setmeal::Model, DbErr> {
        let now = Utc::now();

        entity::setmeal::ActiveModel {
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

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::setmeal::Model>, DbErr> {
        entity::prelude::Setmeal::find_by_id(id).one(self.db).await
    }

    /// Gets one page of combos, most recently updated first.
    ///
    /// # Arguments
    /// - `name` - Optional substring the combo name must contain
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of combos per page, must be greater than zero
    pub async fn get_paginated(
        &self,
        name: Option<&str>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::setmeal::Model>, u64), DbErr> {
        let mut query = entity::prelude::Setmeal::find();
        if let Some(name) = name.filter(|n| !n.is_empty()) {
            query = query.filter(entity::setmeal::Column::Name.contains(name));
        }

        let paginator = query
            .order_by_desc(entity::setmeal::Column::UpdateTime)
            .order_by_desc(entity::setmeal::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let setmeals = paginator.fetch_page(page).await?;

        Ok((setmeals, total))
    }

    /// Overwrites the base fields of a combo.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The updated combo
    /// - `Ok(None)` - No combo exists with the specified ID
    /// - `Err(DbErr)` - Database error during update operation
    pub async fn update(
        &self,
        id: i32,
        fields: SetmealFields,
        status: Option<SaleStatus>,
        employee_id: i32,
    ) -> Result<Option<entity::setmeal::Model>, DbErr> {
        let Some(setmeal) = entity::prelude::Setmeal::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::setmeal::ActiveModel = setmeal.into();
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

        Ok(Some(active_model.update(self.db).await?))
    }

    /// Sets the status of every listed combo in a single statement.
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

        let result = entity::prelude::Setmeal::update_many()
            .col_expr(entity::setmeal::Column::Status, Expr::value(status.as_i32()))
            .col_expr(entity::setmeal::Column::UpdateTime, Expr::value(Utc::now()))
            .col_expr(entity::setmeal::Column::UpdateUser, Expr::value(employee_id))
            .filter(entity::setmeal::Column::Id.is_in(ids.to_vec()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Gets the names of listed combos that are currently on sale, ordered by ID.
    pub async fn get_on_sale_names(&self, ids: &[i32]) -> Result<Vec<String>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let setmeals = entity::prelude::Setmeal::find()
            .filter(entity::setmeal::Column::Id.is_in(ids.to_vec()))
            .filter(entity::setmeal::Column::Status.eq(SaleStatus::OnSale.as_i32()))
            .order_by_asc(entity::setmeal::Column::Id)
            .all(self.db)
            .await?;

        Ok(setmeals.into_iter().map(|s| s.name).collect())
    }

    /// Deletes every listed combo.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of combos deleted
    /// - `Err(DbErr)` - Database error during delete operation
    pub async fn delete_by_ids(&self, ids: &[i32]) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::Setmeal::delete_many()
            .filter(entity::setmeal::Column::Id.is_in(ids.to_vec()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
