use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::MasteryLevel;

/// Request payload for the admin "mark paid" action.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MarkPaidRequest {
    pub mastery_level: MasteryLevel,
}
