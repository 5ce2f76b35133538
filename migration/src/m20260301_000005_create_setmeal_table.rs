use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Setmeal::Table)
                    .if_not_exists()
                    .col(pk_auto(Setmeal::Id))
                    .col(string(Setmeal::Name))
                    .col(integer(Setmeal::CategoryId))
                    .col(big_integer(Setmeal::Price))
                    .col(string(Setmeal::Image).default(""))
                    .col(text_null(Setmeal::Description))
                    .col(integer(Setmeal::Status).default(1))
                    .col(
                        timestamp_with_time_zone(Setmeal::CreateTime)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Setmeal::UpdateTime)
                            .default(Expr::current_timestamp()),
                    )
                    .col(integer(Setmeal::CreateUser))
                    .col(integer(Setmeal::UpdateUser))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Setmeal::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Setmeal {
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
