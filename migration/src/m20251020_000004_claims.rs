use sea_orm_migration::{prelude::*, schema::*};

static IDX_CLAIMS_FOOD_ID: &str = "idx-claims-food_id";
static IDX_CLAIMS_RECEIVER_ID: &str = "idx-claims-receiver_id";
static IDX_CLAIMS_STATUS: &str = "idx-claims-status";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Claims::Table)
                    .if_not_exists()
                    .col(pk_auto(Claims::ClaimId))
                    .col(integer(Claims::FoodId))
                    .col(integer(Claims::ReceiverId))
                    .col(timestamp_null(Claims::Timestamp))
                    .col(string(Claims::Status))
                    .to_owned(),
            )
            .await?;

        for (name, column) in [
            (IDX_CLAIMS_FOOD_ID, Claims::FoodId),
            (IDX_CLAIMS_RECEIVER_ID, Claims::ReceiverId),
            (IDX_CLAIMS_STATUS, Claims::Status),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(Claims::Table)
                        .col(column)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [IDX_CLAIMS_STATUS, IDX_CLAIMS_RECEIVER_ID, IDX_CLAIMS_FOOD_ID] {
            manager
                .drop_index(Index::drop().name(name).table(Claims::Table).to_owned())
                .await?;
        }

        manager
            .drop_table(Table::drop().table(Claims::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Claims {
    Table,
    #[sea_orm(iden = "Claim_ID")]
    ClaimId,
    #[sea_orm(iden = "Food_ID")]
    FoodId,
    #[sea_orm(iden = "Receiver_ID")]
    ReceiverId,
    #[sea_orm(iden = "Timestamp")]
    Timestamp,
    #[sea_orm(iden = "Status")]
    Status,
}
