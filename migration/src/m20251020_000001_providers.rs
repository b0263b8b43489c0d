use sea_orm_migration::{prelude::*, schema::*};

static IDX_PROVIDERS_CITY: &str = "idx-providers-city";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Providers::Table)
                    .if_not_exists()
                    .col(pk_auto(Providers::ProviderId))
                    .col(string(Providers::Name))
                    .col(string(Providers::ProviderType))
                    .col(string(Providers::Contact))
                    .col(string(Providers::City))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PROVIDERS_CITY)
                    .table(Providers::Table)
                    .col(Providers::City)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PROVIDERS_CITY)
                    .table(Providers::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Providers::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Providers {
    Table,
    #[sea_orm(iden = "Provider_ID")]
    ProviderId,
    #[sea_orm(iden = "Name")]
    Name,
    #[sea_orm(iden = "Provider_Type")]
    ProviderType,
    #[sea_orm(iden = "Contact")]
    Contact,
    #[sea_orm(iden = "City")]
    City,
}
