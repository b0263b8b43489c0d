use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};

use crate::model::receiver::{NewReceiverDto, ReceiverUpdateDto};

pub struct ReceiverRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReceiverRepository<'a, C> {
    /// Creates a new instance of [`ReceiverRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new receiver
    pub async fn create(
        &self,
        receiver: NewReceiverDto,
    ) -> Result<entity::receiver::Model, DbErr> {
        let receiver = entity::receiver::ActiveModel {
            name: ActiveValue::Set(receiver.name),
            receiver_type: ActiveValue::Set(receiver.receiver_type),
            contact: ActiveValue::Set(receiver.contact),
            city: ActiveValue::Set(receiver.city),
            ..Default::default()
        };

        receiver.insert(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::receiver::Model>, DbErr> {
        entity::prelude::Receiver::find()
            .order_by_asc(entity::receiver::Column::ReceiverId)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(
        &self,
        receiver_id: i32,
    ) -> Result<Option<entity::receiver::Model>, DbErr> {
        entity::prelude::Receiver::find_by_id(receiver_id)
            .one(self.db)
            .await
    }

    /// Updates name and contact of a receiver, returns `None` if the receiver doesn't exist
    pub async fn update(
        &self,
        receiver_id: i32,
        changes: ReceiverUpdateDto,
    ) -> Result<Option<entity::receiver::Model>, DbErr> {
        let receiver = match self.get_by_id(receiver_id).await? {
            Some(receiver) => receiver,
            None => return Ok(None),
        };

        let mut receiver_am = receiver.into_active_model();
        receiver_am.name = ActiveValue::Set(changes.name);
        receiver_am.contact = ActiveValue::Set(changes.contact);

        let receiver = receiver_am.update(self.db).await?;

        Ok(Some(receiver))
    }

    /// Deletes a receiver
    ///
    /// Claims referencing the receiver are left in place. Returns OK regardless of
    /// the receiver existing, to confirm the deletion result check the
    /// [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, receiver_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Receiver::delete_by_id(receiver_id)
            .exec(self.db)
            .await
    }
}
