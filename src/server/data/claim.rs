use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::ClaimStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};

pub struct ClaimRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ClaimRepository<'a, C> {
    /// Creates a new instance of [`ClaimRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new claim
    ///
    /// Neither the food listing nor the receiver are required to exist.
    pub async fn create(
        &self,
        food_id: i32,
        receiver_id: i32,
        timestamp: NaiveDateTime,
        status: ClaimStatus,
    ) -> Result<entity::claim::Model, DbErr> {
        let claim = entity::claim::ActiveModel {
            food_id: ActiveValue::Set(food_id),
            receiver_id: ActiveValue::Set(receiver_id),
            timestamp: ActiveValue::Set(Some(timestamp)),
            status: ActiveValue::Set(status),
            ..Default::default()
        };

        claim.insert(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::claim::Model>, DbErr> {
        entity::prelude::Claim::find()
            .order_by_asc(entity::claim::Column::ClaimId)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, claim_id: i32) -> Result<Option<entity::claim::Model>, DbErr> {
        entity::prelude::Claim::find_by_id(claim_id)
            .one(self.db)
            .await
    }

    /// Updates the status of a claim, returns `None` if the claim doesn't exist
    pub async fn update_status(
        &self,
        claim_id: i32,
        status: ClaimStatus,
    ) -> Result<Option<entity::claim::Model>, DbErr> {
        let claim = match self.get_by_id(claim_id).await? {
            Some(claim) => claim,
            None => return Ok(None),
        };

        let mut claim_am = claim.into_active_model();
        claim_am.status = ActiveValue::Set(status);

        let claim = claim_am.update(self.db).await?;

        Ok(Some(claim))
    }

    /// Deletes a claim
    ///
    /// Returns OK regardless of claim existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, claim_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Claim::delete_by_id(claim_id)
            .exec(self.db)
            .await
    }
}
