use chrono::NaiveTime;

use crate::{
    model::{
        claim::{ClaimUpdateDto, NewClaimDto},
        mutation::{MutationKind, MutationOutcomeDto},
        table::Table,
    },
    server::{
        data::claim::ClaimRepository,
        error::{record::RecordError, Error},
        service::mutation::{outcome, updated, validate, MutationService},
    },
};

impl<'a> MutationService<'a> {
    /// The claim is timestamped at midnight of its claim date, today when none is given.
    pub(super) async fn insert_claim(
        &self,
        claim: NewClaimDto,
    ) -> Result<MutationOutcomeDto, Error> {
        let food_id = validate::reference_id("Food_ID", claim.food_id)?;
        let receiver_id = validate::reference_id("Receiver_ID", claim.receiver_id)?;
        let claim_date = validate::not_before_today(
            "Claim date",
            claim.claim_date.unwrap_or(self.today),
            self.today,
        )?;
        let status = validate::status(&claim.status)?;

        let claim = ClaimRepository::new(self.db)
            .create(
                food_id,
                receiver_id,
                claim_date.and_time(NaiveTime::MIN),
                status,
            )
            .await?;

        Ok(outcome(
            Table::Claims,
            MutationKind::Insert,
            claim.claim_id,
            "Claim added successfully".to_string(),
        ))
    }

    pub(super) async fn update_claim(
        &self,
        claim_id: i32,
        changes: ClaimUpdateDto,
    ) -> Result<MutationOutcomeDto, Error> {
        let claim_id = validate::target_id(Table::Claims, claim_id)?;
        let status = validate::status(&changes.status)?;

        ClaimRepository::new(self.db)
            .update_status(claim_id, status)
            .await?
            .ok_or(RecordError::NotFound {
                table: Table::Claims,
                id: claim_id,
            })?;

        Ok(updated(Table::Claims, claim_id))
    }
}
