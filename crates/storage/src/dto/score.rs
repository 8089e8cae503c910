use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Request payload for submitting or resubmitting a judge's score.
/// Criterion sub-scores are bounded to [0, 20] each.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SubmitScoreRequest {
    pub judge_id: Uuid,
    pub performance_id: Uuid,

    #[validate(range(min = 0.0, max = 20.0, message = "technical must be between 0 and 20"))]
    pub technical: f64,

    #[validate(range(min = 0.0, max = 20.0, message = "musical must be between 0 and 20"))]
    pub musical: f64,

    #[validate(range(min = 0.0, max = 20.0, message = "performance must be between 0 and 20"))]
    pub performance: f64,

    #[validate(range(min = 0.0, max = 20.0, message = "styling must be between 0 and 20"))]
    pub styling: f64,

    #[validate(range(
        min = 0.0,
        max = 20.0,
        message = "overall_impression must be between 0 and 20"
    ))]
    pub overall_impression: f64,

    #[validate(length(max = 2000))]
    pub comments: Option<String>,
}
