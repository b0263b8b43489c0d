use crate::{
    model::{
        mutation::{MutationKind, MutationOutcomeDto},
        receiver::{NewReceiverDto, ReceiverUpdateDto},
        table::Table,
    },
    server::{
        data::receiver::ReceiverRepository,
        error::{record::RecordError, Error},
        service::mutation::{outcome, updated, validate, MutationService},
    },
};

impl<'a> MutationService<'a> {
    pub(super) async fn insert_receiver(
        &self,
        receiver: NewReceiverDto,
    ) -> Result<MutationOutcomeDto, Error> {
        let receiver = NewReceiverDto {
            name: validate::required_text("Name", &receiver.name)?,
            ..receiver
        };

        let receiver = ReceiverRepository::new(self.db).create(receiver).await?;

        Ok(outcome(
            Table::Receivers,
            MutationKind::Insert,
            receiver.receiver_id,
            format!("Receiver '{}' added successfully", receiver.name),
        ))
    }

    pub(super) async fn update_receiver(
        &self,
        receiver_id: i32,
        changes: ReceiverUpdateDto,
    ) -> Result<MutationOutcomeDto, Error> {
        let receiver_id = validate::target_id(Table::Receivers, receiver_id)?;
        let changes = ReceiverUpdateDto {
            name: validate::required_text("Name", &changes.name)?,
            ..changes
        };

        ReceiverRepository::new(self.db)
            .update(receiver_id, changes)
            .await?
            .ok_or(RecordError::NotFound {
                table: Table::Receivers,
                id: receiver_id,
            })?;

        Ok(updated(Table::Receivers, receiver_id))
    }
}
