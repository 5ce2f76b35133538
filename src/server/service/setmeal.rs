use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};

use crate::server::{
    data::{
        category::CategoryRepository, setmeal::SetmealRepository,
        setmeal_dish::SetmealDishRepository,
    },
    error::{catalog::CatalogError, AppError},
    model::{
        page::{PageRequest, Paginated},
        setmeal::{CreateSetmealParams, SetmealWithDishes, UpdateSetmealParams},
        status::SaleStatus,
    },
};

pub struct SetmealService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SetmealService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of combos with their dishes and category names
    pub async fn get_paginated(
        &self,
        name: Option<&str>,
        request: PageRequest,
    ) -> Result<Paginated<SetmealWithDishes>, AppError> {
        let repo = SetmealRepository::new(self.db);

        let (setmeals, total) = repo
            .get_paginated(name, request.index(), request.page_size)
            .await?;

        let records = compose(self.db, setmeals).await?;

        Ok(Paginated::new(records, total, request))
    }

    /// Gets a combo with all of its dish links
    pub async fn get_by_id(&self, id: i32) -> Result<SetmealWithDishes, AppError> {
        let repo = SetmealRepository::new(self.db);

        let Some(setmeal) = repo.get_by_id(id).await? else {
            return Err(AppError::NotFound(format!("Combo {} not found", id)));
        };

        let mut records = compose(self.db, vec![setmeal]).await?;

        records
            .pop()
            .ok_or_else(|| AppError::NotFound(format!("Combo {} not found", id)))
    }

    /// Creates a combo and its dish links in one transaction
    pub async fn create(
        &self,
        params: CreateSetmealParams,
        employee_id: i32,
    ) -> Result<SetmealWithDishes, AppError> {
        let txn = self.db.begin().await?;

        let setmeal = SetmealRepository::new(&txn)
            .create(params.fields, params.status, employee_id)
            .await?;

        let dishes = SetmealDishRepository::new(&txn)
            .create_many(setmeal.id, params.dishes, employee_id)
            .await?;

        let category_name = CategoryRepository::new(&txn)
            .get_names_by_ids(&[setmeal.category_id])
            .await?
            .remove(&setmeal.category_id);

        txn.commit().await?;

        tracing::info!(
            "Employee {} created combo {} '{}' with {} dishes",
            employee_id,
            setmeal.id,
            setmeal.name,
            dishes.len()
        );

        Ok(SetmealWithDishes {
            setmeal,
            dishes,
            category_name,
        })
    }

    /// Updates a combo and replaces its whole dish link set in one transaction
    pub async fn update(
        &self,
        params: UpdateSetmealParams,
        employee_id: i32,
    ) -> Result<SetmealWithDishes, AppError> {
        let txn = self.db.begin().await?;

        let Some(setmeal) = SetmealRepository::new(&txn)
            .update(params.id, params.fields, params.status, employee_id)
            .await?
        else {
            return Err(CatalogError::WriteFailed(format!(
                "update combo failed: combo {} does not exist",
                params.id
            ))
            .into());
        };

        let link_repo = SetmealDishRepository::new(&txn);
        link_repo.delete_by_setmeal_ids(&[setmeal.id]).await?;
        let dishes = link_repo
            .create_many(setmeal.id, params.dishes, employee_id)
            .await?;

        let category_name = CategoryRepository::new(&txn)
            .get_names_by_ids(&[setmeal.category_id])
            .await?
            .remove(&setmeal.category_id);

        txn.commit().await?;

        tracing::info!("Employee {} updated combo {}", employee_id, setmeal.id);

        Ok(SetmealWithDishes {
            setmeal,
            dishes,
            category_name,
        })
    }

    /// Sets the sale status of every listed combo
    ///
    /// Fails when no row was updated, including for an empty id list.
    pub async fn update_status(
        &self,
        status: SaleStatus,
        ids: &[i32],
        employee_id: i32,
    ) -> Result<u64, AppError> {
        let txn = self.db.begin().await?;

        let updated = SetmealRepository::new(&txn)
            .update_status_by_ids(status, ids, employee_id)
            .await?;

        if updated == 0 {
            return Err(CatalogError::WriteFailed(status.failure_message().to_string()).into());
        }

        txn.commit().await?;

        tracing::info!(
            "Employee {} set status {} on {} combos {:?}",
            employee_id,
            status.as_i32(),
            updated,
            ids
        );

        Ok(updated)
    }

    /// Deletes off-sale combos together with their dish links
    ///
    /// Links are removed by combo id. Rejects the whole batch if any listed combo is on sale.
    pub async fn delete(&self, ids: &[i32]) -> Result<u64, AppError> {
        if ids.is_empty() {
            return Err(CatalogError::WriteFailed("delete combo failed".to_string()).into());
        }

        let txn = self.db.begin().await?;
        let setmeal_repo = SetmealRepository::new(&txn);

        let on_sale = setmeal_repo.get_on_sale_names(ids).await?;
        if !on_sale.is_empty() {
            return Err(CatalogError::OnSale { names: on_sale }.into());
        }

        SetmealDishRepository::new(&txn)
            .delete_by_setmeal_ids(ids)
            .await?;
        let deleted = setmeal_repo.delete_by_ids(ids).await?;

        if deleted == 0 {
            return Err(CatalogError::WriteFailed("delete combo failed".to_string()).into());
        }

        txn.commit().await?;

        tracing::info!("Deleted {} combos {:?}", deleted, ids);

        Ok(deleted)
    }
}

/// Attaches dish links and category names to combos, keeping the input order.
async fn compose<C: ConnectionTrait>(
    db: &C,
    setmeals: Vec<entity::setmeal::Model>,
) -> Result<Vec<SetmealWithDishes>, DbErr> {
    let setmeal_ids: Vec<i32> = setmeals.iter().map(|s| s.id).collect();
    let category_ids: Vec<i32> = setmeals.iter().map(|s| s.category_id).collect();

    let mut links = SetmealDishRepository::new(db)
        .get_by_setmeal_ids(&setmeal_ids)
        .await?;
    let category_names = CategoryRepository::new(db)
        .get_names_by_ids(&category_ids)
        .await?;

    Ok(setmeals
        .into_iter()
        .map(|setmeal| SetmealWithDishes {
            dishes: links.remove(&setmeal.id).unwrap_or_default(),
            category_name: category_names.get(&setmeal.category_id).cloned(),
            setmeal,
        })
        .collect())
}
