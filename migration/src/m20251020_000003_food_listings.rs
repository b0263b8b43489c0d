use sea_orm_migration::{prelude::*, schema::*};

static IDX_FOOD_LISTINGS_PROVIDER_ID: &str = "idx-food_listings-provider_id";
static IDX_FOOD_LISTINGS_EXPIRY_DATE: &str = "idx-food_listings-expiry_date";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Provider_ID is indexed but not constrained: listings outlive their provider.
        manager
            .create_table(
                Table::create()
                    .table(FoodListings::Table)
                    .if_not_exists()
                    .col(pk_auto(FoodListings::FoodId))
                    .col(string(FoodListings::FoodName))
                    .col(integer(FoodListings::Quantity))
                    .col(date(FoodListings::ExpiryDate))
                    .col(integer(FoodListings::ProviderId))
                    .col(string(FoodListings::ProviderType))
                    .col(string(FoodListings::Location))
                    .col(string(FoodListings::FoodType))
                    .col(string(FoodListings::MealType))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FOOD_LISTINGS_PROVIDER_ID)
                    .table(FoodListings::Table)
                    .col(FoodListings::ProviderId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FOOD_LISTINGS_EXPIRY_DATE)
                    .table(FoodListings::Table)
                    .col(FoodListings::ExpiryDate)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FOOD_LISTINGS_EXPIRY_DATE)
                    .table(FoodListings::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FOOD_LISTINGS_PROVIDER_ID)
                    .table(FoodListings::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FoodListings::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum FoodListings {
    Table,
    #[sea_orm(iden = "Food_ID")]
    FoodId,
    #[sea_orm(iden = "Food_Name")]
    FoodName,
    #[sea_orm(iden = "Quantity")]
    Quantity,
    #[sea_orm(iden = "Expiry_Date")]
    ExpiryDate,
    #[sea_orm(iden = "Provider_ID")]
    ProviderId,
    #[sea_orm(iden = "Provider_Type")]
    ProviderType,
    #[sea_orm(iden = "Location")]
    Location,
    #[sea_orm(iden = "Food_Type")]
    FoodType,
    #[sea_orm(iden = "Meal_Type")]
    MealType,
}
