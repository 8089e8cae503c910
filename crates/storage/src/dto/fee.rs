use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{MasteryLevel, PerformanceType};

/// Request payload for quoting the fees of one entry. Quoting never
/// mutates registration-fee state.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct FeeQuoteRequest {
    pub performance_type: PerformanceType,
    pub mastery_level: MasteryLevel,

    #[validate(length(min = 1, message = "at least one participant is required"))]
    pub participant_ids: Vec<Uuid>,

    /// Number of solos bundled into this quote; solos only, defaults to 1.
    #[validate(range(min = 1, message = "solo_count must be at least 1"))]
    pub solo_count: Option<u32>,
}

/// Fee quotation for one entry. Recomputed fresh on every request; the
/// persisted fee on an entry is only a snapshot of this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FeeBreakdown {
    pub registration_fee: Decimal,
    pub performance_fee: Decimal,
    pub total_fee: Decimal,
    pub breakdown: String,
    pub registration_breakdown: String,
}
