use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000005_create_setmeal_table::Setmeal;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SetmealDish::Table)
                    .if_not_exists()
                    .col(pk_auto(SetmealDish::Id))
                    .col(integer(SetmealDish::SetmealId))
                    .col(integer(SetmealDish::DishId))
                    .col(string(SetmealDish::Name))
                    .col(big_integer(SetmealDish::Price))
                    .col(integer(SetmealDish::Copies).default(1))
                    .col(
                        timestamp_with_time_zone(SetmealDish::CreateTime)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(SetmealDish::UpdateTime)
                            .default(Expr::current_timestamp()),
                    )
                    .col(integer(SetmealDish::CreateUser))
                    .col(integer(SetmealDish::UpdateUser))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_setmeal_dish_setmeal_id")
                            .from(SetmealDish::Table, SetmealDish::SetmealId)
                            .to(Setmeal::Table, Setmeal::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SetmealDish::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SetmealDish {
    Table,
    Id,
    SetmealId,
    DishId,
    Name,
    Price,
    Copies,
    CreateTime,
    UpdateTime,
    CreateUser,
    UpdateUser,
}
