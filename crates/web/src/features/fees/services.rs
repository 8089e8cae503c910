use sqlx::PgPool;
use storage::{
    dto::fee::{FeeBreakdown, FeeQuoteRequest},
    error::Result,
    repository::{dancer::DancerRepository, registration_fee::RegistrationFeeRepository},
    services::fees::{self, FeeParticipant},
};

/// Quote the fees for one prospective entry. Reads the latest committed
/// registration-fee state; never writes it, so quoting stays separate from
/// payment recording.
pub async fn quote_fee(pool: &PgPool, request: &FeeQuoteRequest) -> Result<FeeBreakdown> {
    let dancers = DancerRepository::new(pool)
        .find_by_ids(&request.participant_ids)
        .await?;
    let records = RegistrationFeeRepository::new(pool)
        .get_status_for_many(&request.participant_ids)
        .await?;

    let by_id: std::collections::HashMap<_, _> = dancers
        .iter()
        .map(|dancer| (dancer.dancer_id, dancer))
        .collect();

    let participants: Vec<FeeParticipant> = request
        .participant_ids
        .iter()
        .zip(records)
        .map(|(dancer_id, fee_record)| FeeParticipant {
            dancer_id: *dancer_id,
            display_name: by_id
                .get(dancer_id)
                .map(|dancer| dancer.display_name())
                .unwrap_or_default(),
            fee_record,
        })
        .collect();

    fees::compute_fee(
        request.performance_type,
        request.mastery_level,
        &participants,
        request.solo_count,
    )
}
