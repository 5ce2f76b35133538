use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use std::collections::HashMap;

/// Read-only access to categories, used to resolve display names.
pub struct CategoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CategoryRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the names of the given categories keyed by id.
    ///
    /// Ids without a matching row are absent from the map.
    ///
    /// # Arguments
    /// - `ids` - Category ids to look up, duplicates allowed
    ///
    /// # Returns
    /// - `Ok(HashMap<i32, String>)` - Name for every category found
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_names_by_ids(&self, ids: &[i32]) -> Result<HashMap<i32, String>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let categories = entity::prelude::Category::find()
            .filter(entity::category::Column::Id.is_in(ids.to_vec()))
            .all(self.db)
            .await?;

        Ok(categories.into_iter().map(|c| (c.id, c.name)).collect())
    }
}
