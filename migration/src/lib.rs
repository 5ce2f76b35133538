pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_employee_table;
mod m20260301_000002_create_category_table;
mod m20260301_000003_create_dish_table;
mod m20260301_000004_create_dish_flavor_table;
mod m20260301_000005_create_setmeal_table;
mod m20260301_000006_create_setmeal_dish_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_employee_table::Migration),
            Box::new(m20260301_000002_create_category_table::Migration),
            Box::new(m20260301_000003_create_dish_table::Migration),
            Box::new(m20260301_000004_create_dish_flavor_table::Migration),
            Box::new(m20260301_000005_create_setmeal_table::Migration),
            Box::new(m20260301_000006_create_setmeal_dish_table::Migration),
        ]
    }
}
