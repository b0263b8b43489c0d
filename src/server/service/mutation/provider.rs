use crate::{
    model::{
        mutation::{MutationKind, MutationOutcomeDto},
        provider::{NewProviderDto, ProviderUpdateDto},
        table::Table,
    },
    server::{
        data::provider::ProviderRepository,
        error::{record::RecordError, Error},
        service::mutation::{outcome, updated, validate, MutationService},
    },
};

impl<'a> MutationService<'a> {
    pub(super) async fn insert_provider(
        &self,
        provider: NewProviderDto,
    ) -> Result<MutationOutcomeDto, Error> {
        let provider = NewProviderDto {
            name: validate::required_text("Name", &provider.name)?,
            ..provider
        };

        let provider = ProviderRepository::new(self.db).create(provider).await?;

        Ok(outcome(
            Table::Providers,
            MutationKind::Insert,
            provider.provider_id,
            format!("Provider '{}' added successfully", provider.name),
        ))
    }

    pub(super) async fn update_provider(
        &self,
        provider_id: i32,
        changes: ProviderUpdateDto,
    ) -> Result<MutationOutcomeDto, Error> {
        let provider_id = validate::target_id(Table::Providers, provider_id)?;
        let changes = ProviderUpdateDto {
            name: validate::required_text("Name", &changes.name)?,
            ..changes
        };

        ProviderRepository::new(self.db)
            .update(provider_id, changes)
            .await?
            .ok_or(RecordError::NotFound {
                table: Table::Providers,
                id: provider_id,
            })?;

        Ok(updated(Table::Providers, provider_id))
    }
}
