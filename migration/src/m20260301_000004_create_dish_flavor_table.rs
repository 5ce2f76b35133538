use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000003_create_dish_table::Dish;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DishFlavor::Table)
                    .if_not_exists()
                    .col(pk_auto(DishFlavor::Id))
                    .col(integer(DishFlavor::DishId))
                    .col(string(DishFlavor::Name))
                    .col(text(DishFlavor::Value))
                    .col(
                        timestamp_with_time_zone(DishFlavor::CreateTime)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(DishFlavor::UpdateTime)
                            .default(Expr::current_timestamp()),
                    )
                    .col(integer(DishFlavor::CreateUser))
                    .col(integer(DishFlavor::UpdateUser))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dish_flavor_dish_id")
                            .from(DishFlavor::Table, DishFlavor::DishId)
                            .to(Dish::Table, Dish::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DishFlavor::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DishFlavor {
    Table,
    Id,
    DishId,
    Name,
    Value,
    CreateTime,
    UpdateTime,
    CreateUser,
    UpdateUser,
}
