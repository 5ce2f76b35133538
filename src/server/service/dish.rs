use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};

use crate::server::{
    data::{category::CategoryRepository, dish::DishRepository, dish_flavor::DishFlavorRepository},
    error::{catalog::CatalogError, AppError},
    model::{
        dish::{CreateDishParams, DishListFilter, DishWithFlavors, UpdateDishParams},
        page::{PageRequest, Paginated},
        status::SaleStatus,
    },
};

pub struct DishService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DishService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of dishes with their flavors and category names
    pub async fn get_paginated(
        &self,
        name: Option<&str>,
        request: PageRequest,
    ) -> Result<Paginated<DishWithFlavors>, AppError> {
        let repo = DishRepository::new(self.db);

        let (dishes, total) = repo
            .get_paginated(name, request.index(), request.page_size)
            .await?;

        let records = compose(self.db, dishes).await?;

        Ok(Paginated::new(records, total, request))
    }

    /// Gets a dish with all of its flavors
    pub async fn get_by_id(&self, id: i32) -> Result<DishWithFlavors, AppError> {
        let repo = DishRepository::new(self.db);

        let Some(dish) = repo.get_by_id(id).await? else {
            return Err(AppError::NotFound(format!("Dish {} not found", id)));
        };

        let mut records = compose(self.db, vec![dish]).await?;

        records
            .pop()
            .ok_or_else(|| AppError::NotFound(format!("Dish {} not found", id)))
    }

    /// Creates a dish and its flavors in one transaction
    pub async fn create(
        &self,
        params: CreateDishParams,
        employee_id: i32,
    ) -> Result<DishWithFlavors, AppError> {
        let txn = self.db.begin().await?;

        let dish = DishRepository::new(&txn)
            .create(params.fields, params.status, employee_id)
            .await?;

        let flavors = DishFlavorRepository::new(&txn)
            .create_many(dish.id, params.flavors, employee_id)
            .await?;

        let category_name = CategoryRepository::new(&txn)
            .get_names_by_ids(&[dish.category_id])
            .await?
            .remove(&dish.category_id);

        txn.commit().await?;

        tracing::info!(
            "Employee {} created dish {} '{}' with {} flavors",
            employee_id,
            dish.id,
            dish.name,
            flavors.len()
        );

        Ok(DishWithFlavors {
            dish,
            flavors,
            category_name,
        })
    }

    /// Updates a dish and replaces its whole flavor set in one transaction
    pub async fn update(
        &self,
        params: UpdateDishParams,
        employee_id: i32,
    ) -> Result<DishWithFlavors, AppError> {
        let txn = self.db.begin().await?;

        let Some(dish) = DishRepository::new(&txn)
            .update(params.id, params.fields, params.status, employee_id)
            .await?
        else {
            return Err(CatalogError::WriteFailed(format!(
                "update dish failed: dish {} does not exist",
                params.id
            ))
            .into());
        };

        let flavor_repo = DishFlavorRepository::new(&txn);
        flavor_repo.delete_by_dish_ids(&[dish.id]).await?;
        let flavors = flavor_repo
            .create_many(dish.id, params.flavors, employee_id)
            .await?;

        let category_name = CategoryRepository::new(&txn)
            .get_names_by_ids(&[dish.category_id])
            .await?
            .remove(&dish.category_id);

        txn.commit().await?;

        tracing::info!("Employee {} updated dish {}", employee_id, dish.id);

        Ok(DishWithFlavors {
            dish,
            flavors,
            category_name,
        })
    }

    /// Sets the sale status of every listed dish
    ///
    /// Fails when no row was updated, including for an empty id list.
    pub async fn update_status(
        &self,
        status: SaleStatus,
        ids: &[i32],
        employee_id: i32,
    ) -> Result<u64, AppError> {
        let txn = self.db.begin().await?;

        let updated = DishRepository::new(&txn)
            .update_status_by_ids(status, ids, employee_id)
            .await?;

        if updated == 0 {
            return Err(CatalogError::WriteFailed(status.failure_message().to_string()).into());
        }

        txn.commit().await?;

        tracing::info!(
            "Employee {} set status {} on {} dishes {:?}",
            employee_id,
            status.as_i32(),
            updated,
            ids
        );

        Ok(updated)
    }

    /// Deletes off-sale dishes together with their flavors
    ///
    /// Rejects the whole batch if any listed dish is on sale.
    pub async fn delete(&self, ids: &[i32]) -> Result<u64, AppError> {
        if ids.is_empty() {
            return Err(CatalogError::WriteFailed("delete dish failed".to_string()).into());
        }

        let txn = self.db.begin().await?;
        let dish_repo = DishRepository::new(&txn);

        let on_sale = dish_repo.get_on_sale_names(ids).await?;
        if !on_sale.is_empty() {
            return Err(CatalogError::OnSale { names: on_sale }.into());
        }

        DishFlavorRepository::new(&txn)
            .delete_by_dish_ids(ids)
            .await?;
        let deleted = dish_repo.delete_by_ids(ids).await?;

        if deleted == 0 {
            return Err(CatalogError::WriteFailed("delete dish failed".to_string()).into());
        }

        txn.commit().await?;

        tracing::info!("Deleted {} dishes {:?}", deleted, ids);

        Ok(deleted)
    }

    /// Lists dishes by name or category with flavors and category names
    ///
    /// An empty result is returned as an empty list.
    pub async fn list(&self, filter: DishListFilter) -> Result<Vec<DishWithFlavors>, AppError> {
        let has_name = filter.name.as_deref().is_some_and(|n| !n.is_empty());
        if !has_name && filter.category_id.is_none() {
            return Err(AppError::BadRequest(
                "Either categoryId or name is required".to_string(),
            ));
        }

        let dishes = DishRepository::new(self.db).get_by_filter(&filter).await?;

        Ok(compose(self.db, dishes).await?)
    }
}

/// Attaches flavors and category names to dishes, keeping the input order.
async fn compose<C: ConnectionTrait>(
    db: &C,
    dishes: Vec<entity::dish::Model>,
) -> Result<Vec<DishWithFlavors>, DbErr> {
    let dish_ids: Vec<i32> = dishes.iter().map(|d| d.id).collect();
    let category_ids: Vec<i32> = dishes.iter().map(|d| d.category_id).collect();

    let mut flavors = DishFlavorRepository::new(db)
        .get_by_dish_ids(&dish_ids)
        .await?;
    let category_names = CategoryRepository::new(db)
        .get_names_by_ids(&category_ids)
        .await?;

    Ok(dishes
        .into_iter()
        .map(|dish| DishWithFlavors {
            flavors: flavors.remove(&dish.id).unwrap_or_default(),
            category_name: category_names.get(&dish.category_id).cloned(),
            dish,
        })
        .collect())
}
