pub use sea_orm_migration::prelude::*;

mod m20251020_000001_providers;
mod m20251020_000002_receivers;
mod m20251020_000003_food_listings;
mod m20251020_000004_claims;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251020_000001_providers::Migration),
            Box::new(m20251020_000002_receivers::Migration),
            Box::new(m20251020_000003_food_listings::Migration),
            Box::new(m20251020_000004_claims::Migration),
        ]
    }
}
