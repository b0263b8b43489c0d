use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};

use crate::model::provider::{NewProviderDto, ProviderUpdateDto};

pub struct ProviderRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProviderRepository<'a, C> {
    /// Creates a new instance of [`ProviderRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new provider
    pub async fn create(
        &self,
        provider: NewProviderDto,
    ) -> Result<entity::provider::Model, DbErr> {
        let provider = entity::provider::ActiveModel {
            name: ActiveValue::Set(provider.name),
            provider_type: ActiveValue::Set(provider.provider_type),
            contact: ActiveValue::Set(provider.contact),
            city: ActiveValue::Set(provider.city),
            ..Default::default()
        };

        provider.insert(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::provider::Model>, DbErr> {
        entity::prelude::Provider::find()
            .order_by_asc(entity::provider::Column::ProviderId)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(
        &self,
        provider_id: i32,
    ) -> Result<Option<entity::provider::Model>, DbErr> {
        entity::prelude::Provider::find_by_id(provider_id)
            .one(self.db)
            .await
    }

    /// Updates name and contact of a provider, returns `None` if the provider doesn't exist
    pub async fn update(
        &self,
        provider_id: i32,
        changes: ProviderUpdateDto,
    ) -> Result<Option<entity::provider::Model>, DbErr> {
        let provider = match self.get_by_id(provider_id).await? {
            Some(provider) => provider,
            None => return Ok(None),
        };

        let mut provider_am = provider.into_active_model();
        provider_am.name = ActiveValue::Set(changes.name);
        provider_am.contact = ActiveValue::Set(changes.contact);

        let provider = provider_am.update(self.db).await?;

        Ok(Some(provider))
    }

    /// Deletes a provider
    ///
    /// Food listings referencing the provider are left in place. Returns OK regardless of
    /// the provider existing, to confirm the deletion result check the
    /// [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, provider_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Provider::delete_by_id(provider_id)
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {

    mod create {
        use foodshare_test_utils::prelude::*;

        use crate::{model::provider::NewProviderDto, server::data::provider::ProviderRepository};

        /// Expect success and an assigned primary key when creating a provider
        #[tokio::test]
        async fn creates_provider() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_food_tables()
                .with_mock_provider(4)
                .build()
                .await?;

            let provider_repo = ProviderRepository::new(&test.db);
            let provider = provider_repo
                .create(NewProviderDto {
                    name: "Green Grocer".to_string(),
                    provider_type: "Grocery Store".to_string(),
                    contact: "555-0101".to_string(),
                    city: "Lake Michael".to_string(),
                })
                .await?;

            assert_eq!(provider.provider_id, 5);
            assert_eq!(provider.name, "Green Grocer");

            Ok(())
        }

        /// Expect Error when required database tables are not present
        #[tokio::test]
        async fn fails_when_tables_missing() -> Result<(), TestError> {
            let test = TestBuilder::new().build().await?;

            let provider_repo = ProviderRepository::new(&test.db);
            let result = provider_repo.create(NewProviderDto::default()).await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod get_all {
        use foodshare_test_utils::prelude::*;

        use crate::server::data::provider::ProviderRepository;

        /// Expect all providers ordered by ID
        #[tokio::test]
        async fn returns_providers_in_id_order() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_food_tables()
                .with_mock_provider(3)
                .with_mock_provider(1)
                .build()
                .await?;

            let provider_repo = ProviderRepository::new(&test.db);
            let providers = provider_repo.get_all().await?;

            let ids: Vec<i32> = providers.iter().map(|p| p.provider_id).collect();
            assert_eq!(ids, vec![1, 3]);

            Ok(())
        }
    }

    mod get_by_id {
        use foodshare_test_utils::prelude::*;

        use crate::server::data::provider::ProviderRepository;

        /// Expect Ok(Some(_)) when provider exists
        #[tokio::test]
        async fn finds_existing_provider() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_food_tables()
                .with_mock_provider(1)
                .build()
                .await?;

            let provider_repo = ProviderRepository::new(&test.db);
            let result = provider_repo.get_by_id(1).await;

            assert!(matches!(result, Ok(Some(_))));

            Ok(())
        }

        /// Expect Ok(None) when provider does not exist
        #[tokio::test]
        async fn returns_none_for_nonexistent_provider() -> Result<(), TestError> {
            let test = TestBuilder::new().with_food_tables().build().await?;

            let provider_repo = ProviderRepository::new(&test.db);
            let result = provider_repo.get_by_id(1).await;

            assert!(matches!(result, Ok(None)));

            Ok(())
        }
    }

    mod update {
        use foodshare_test_utils::prelude::*;

        use crate::{
            model::provider::ProviderUpdateDto, server::data::provider::ProviderRepository,
        };

        /// Expect name and contact to change while type and city are kept
        #[tokio::test]
        async fn updates_name_and_contact_only() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_food_tables().build().await?;
            let provider_model = test.fixtures().insert_mock_provider(1).await?;

            let provider_repo = ProviderRepository::new(&test.db);
            let updated = provider_repo
                .update(
                    1,
                    ProviderUpdateDto {
                        name: "Renamed".to_string(),
                        contact: "555-0123".to_string(),
                    },
                )
                .await?
                .unwrap();

            assert_eq!(updated.name, "Renamed");
            assert_eq!(updated.contact, "555-0123");
            assert_eq!(updated.provider_type, provider_model.provider_type);
            assert_eq!(updated.city, provider_model.city);

            Ok(())
        }

        /// Expect Ok(None) when provider does not exist
        #[tokio::test]
        async fn returns_none_for_nonexistent_provider() -> Result<(), TestError> {
            let test = TestBuilder::new().with_food_tables().build().await?;

            let provider_repo = ProviderRepository::new(&test.db);
            let result = provider_repo.update(1, ProviderUpdateDto::default()).await;

            assert!(matches!(result, Ok(None)));

            Ok(())
        }
    }

    mod delete {
        use foodshare_test_utils::prelude::*;
        use sea_orm::EntityTrait;

        use crate::server::data::provider::ProviderRepository;

        /// Expect provider to be deleted while its food listings are left orphaned
        #[tokio::test]
        async fn deletes_provider_and_orphans_listings() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_food_tables()
                .with_mock_provider(1)
                .with_mock_food_listing(1, 1)
                .build()
                .await?;

            let provider_repo = ProviderRepository::new(&test.db);
            let delete_result = provider_repo.delete(1).await?;

            assert_eq!(delete_result.rows_affected, 1);
            let provider_exists = entity::prelude::Provider::find_by_id(1).one(&test.db).await?;
            assert!(provider_exists.is_none());
            let listing = entity::prelude::FoodListing::find_by_id(1)
                .one(&test.db)
                .await?
                .unwrap();
            assert_eq!(listing.provider_id, 1);

            Ok(())
        }

        /// Expect no rows to be affected when deleting a provider that does not exist
        #[tokio::test]
        async fn returns_no_rows_for_nonexistent_provider() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_food_tables()
                .with_mock_provider(1)
                .build()
                .await?;

            let provider_repo = ProviderRepository::new(&test.db);
            let delete_result = provider_repo.delete(2).await?;

            assert_eq!(delete_result.rows_affected, 0);

            Ok(())
        }
    }
}
