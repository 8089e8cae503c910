use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::{MasteryLevel, RegistrationFeeRecord};

/// Repository for the per-dancer registration-fee side table. Mutations are
/// admin-triggered only; fee quotation reads this but never writes it.
pub struct RegistrationFeeRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RegistrationFeeRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Record a payment under the given mastery level, overwriting any
    /// prior state and stamping the payment time.
    pub async fn mark_paid(
        &self,
        dancer_id: Uuid,
        level: MasteryLevel,
    ) -> Result<RegistrationFeeRecord> {
        let record = sqlx::query_as::<_, RegistrationFeeRecord>(
            r#"
            INSERT INTO registration_fees (dancer_id, paid, paid_mastery_level, paid_at)
            VALUES ($1, TRUE, $2, NOW())
            ON CONFLICT (dancer_id) DO UPDATE SET
                paid = TRUE,
                paid_mastery_level = EXCLUDED.paid_mastery_level,
                paid_at = NOW()
            RETURNING dancer_id, paid, paid_mastery_level, paid_at
            "#,
        )
        .bind(dancer_id)
        .bind(level.as_str())
        .fetch_one(self.pool)
        .await
        .map_err(unknown_dancer_error)?;

        Ok(record)
    }

    /// Clear the paid flag and the mastery level it was paid under.
    pub async fn mark_unpaid(&self, dancer_id: Uuid) -> Result<RegistrationFeeRecord> {
        let record = sqlx::query_as::<_, RegistrationFeeRecord>(
            r#"
            INSERT INTO registration_fees (dancer_id, paid, paid_mastery_level, paid_at)
            VALUES ($1, FALSE, NULL, NULL)
            ON CONFLICT (dancer_id) DO UPDATE SET
                paid = FALSE,
                paid_mastery_level = NULL,
                paid_at = NULL
            RETURNING dancer_id, paid, paid_mastery_level, paid_at
            "#,
        )
        .bind(dancer_id)
        .fetch_one(self.pool)
        .await
        .map_err(unknown_dancer_error)?;

        Ok(record)
    }

    /// Current status for one dancer; no stored row reads as unpaid.
    pub async fn get_status(&self, dancer_id: Uuid) -> Result<RegistrationFeeRecord> {
        let record = sqlx::query_as::<_, RegistrationFeeRecord>(
            r#"
            SELECT dancer_id, paid, paid_mastery_level, paid_at
            FROM registration_fees
            WHERE dancer_id = $1
            "#,
        )
        .bind(dancer_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(record.unwrap_or_else(|| RegistrationFeeRecord::unpaid(dancer_id)))
    }

    /// Statuses for a roster, one record per requested dancer in request
    /// order, with unpaid defaults filled in for dancers without a row.
    pub async fn get_status_for_many(
        &self,
        dancer_ids: &[Uuid],
    ) -> Result<Vec<RegistrationFeeRecord>> {
        if dancer_ids.is_empty() {
            return Ok(Vec::new());
        }

        let stored = sqlx::query_as::<_, RegistrationFeeRecord>(
            r#"
            SELECT dancer_id, paid, paid_mastery_level, paid_at
            FROM registration_fees
            WHERE dancer_id = ANY($1)
            "#,
        )
        .bind(dancer_ids.to_vec())
        .fetch_all(self.pool)
        .await?;

        let by_id: std::collections::HashMap<Uuid, RegistrationFeeRecord> = stored
            .into_iter()
            .map(|record| (record.dancer_id, record))
            .collect();

        Ok(dancer_ids
            .iter()
            .map(|id| {
                by_id
                    .get(id)
                    .cloned()
                    .unwrap_or_else(|| RegistrationFeeRecord::unpaid(*id))
            })
            .collect())
    }
}

fn unknown_dancer_error(e: sqlx::Error) -> StorageError {
    let err = StorageError::from(e);
    if err.is_foreign_key_violation() {
        StorageError::NotFound
    } else {
        err
    }
}
