use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Dish::Table)
                    .if_not_exists()
                    .col(pk_auto(Dish::Id))
                    .col(string(Dish::Name))
                    .col(integer(Dish::CategoryId))
                    .col(big_integer(Dish::Price))
                    .col(string(Dish::Image).default(""))
                    .col(text_null(Dish::Description))
                    .col(integer(Dish::Status).default(1))
                    .col(
                        timestamp_with_time_zone(Dish::CreateTime)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Dish::UpdateTime)
                            .default(Expr::current_timestamp()),
                    )
                    .col(integer(Dish::CreateUser))
                    .col(integer(Dish::UpdateUser))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_dish_update_time")
                    .table(Dish::Table)
                    .col(Dish::UpdateTime)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Dish::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Dish {
    Table,
    Id,
    Name,
    CategoryId,
    Price,
    Image,
    Description,
    Status,
    CreateTime,
    UpdateTime,
    CreateUser,
    UpdateUser,
}
