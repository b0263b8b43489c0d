use sea_orm_migration::{prelude::*, schema::*};

static IDX_RECEIVERS_CITY: &str = "idx-receivers-city";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Receivers::Table)
                    .if_not_exists()
                    .col(pk_auto(Receivers::ReceiverId))
                    .col(string(Receivers::Name))
                    .col(string(Receivers::ReceiverType))
                    .col(string(Receivers::Contact))
                    .col(string(Receivers::City))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_RECEIVERS_CITY)
                    .table(Receivers::Table)
                    .col(Receivers::City)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_RECEIVERS_CITY)
                    .table(Receivers::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Receivers::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Receivers {
    Table,
    #[sea_orm(iden = "Receiver_ID")]
    ReceiverId,
    #[sea_orm(iden = "Name")]
    Name,
    #[sea_orm(iden = "Receiver_Type")]
    ReceiverType,
    #[sea_orm(iden = "Contact")]
    Contact,
    #[sea_orm(iden = "City")]
    City,
}
