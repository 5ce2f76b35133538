//! Category factory for creating test category entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test categories with customizable fields.
pub struct CategoryFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    kind: i32,
    sort: i32,
}

impl<'a> CategoryFactory<'a> {
    /// Creates a new CategoryFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Category {id}"` where id is auto-incremented
    /// - kind: `1` (dish category)
    /// - sort: `0`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Category {}", id),
            kind: 1,
            sort: 0,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the category type (1 = dish category, 2 = combo category).
    pub fn kind(mut self, kind: i32) -> Self {
        self.kind = kind;
        self
    }

    pub fn sort(mut self, sort: i32) -> Self {
        self.sort = sort;
        self
    }

    /// Builds and inserts the category entity into the database.
    pub async fn build(self) -> Result<entity::category::Model, DbErr> {
        let now = chrono::Utc::now();

        entity::category::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            r#type: ActiveValue::Set(self.kind),
            sort: ActiveValue::Set(self.sort),
            create_time: ActiveValue::Set(now),
            update_time: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a dish category with default values.
///
/// Shorthand for `CategoryFactory::new(db).build().await`.
pub async fn create_category(db: &DatabaseConnection) -> Result<entity::category::Model, DbErr> {
    CategoryFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_category_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(Category)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let category = create_category(db).await?;

        assert!(category.name.starts_with("Category "));
        assert_eq!(category.r#type, 1);

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_unique_categories() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(Category)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let first = create_category(db).await?;
        let second = create_category(db).await?;

        assert_ne!(first.id, second.id);
        assert_ne!(first.name, second.name);

        Ok(())
    }
}
