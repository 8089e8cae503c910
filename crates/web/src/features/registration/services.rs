use sqlx::PgPool;
use storage::{
    error::Result,
    models::{MasteryLevel, RegistrationFeeRecord},
    repository::registration_fee::RegistrationFeeRepository,
};
use uuid::Uuid;

pub async fn get_status(pool: &PgPool, dancer_id: Uuid) -> Result<RegistrationFeeRecord> {
    RegistrationFeeRepository::new(pool).get_status(dancer_id).await
}

pub async fn mark_paid(
    pool: &PgPool,
    dancer_id: Uuid,
    level: MasteryLevel,
) -> Result<RegistrationFeeRecord> {
    RegistrationFeeRepository::new(pool).mark_paid(dancer_id, level).await
}

pub async fn mark_unpaid(pool: &PgPool, dancer_id: Uuid) -> Result<RegistrationFeeRecord> {
    RegistrationFeeRepository::new(pool).mark_unpaid(dancer_id).await
}
