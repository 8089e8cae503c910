use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{MasteryLevel, PerformanceType};

/// Request payload for approving an entry into the competition.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreatePerformanceRequest {
    pub event_id: Uuid,

    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"))]
    pub title: String,

    #[validate(length(max = 255))]
    pub choreographer: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Age category is required"))]
    pub age_category: String,

    pub performance_type: PerformanceType,

    #[validate(length(min = 1, max = 100, message = "Dance style is required"))]
    pub dance_style: String,

    pub mastery_level: MasteryLevel,

    #[validate(length(min = 1, max = 100, message = "Region is required"))]
    pub region: String,

    /// Recorded fallback name; rankings prefer the participant roster.
    #[validate(length(max = 255))]
    pub contestant_name: Option<String>,

    /// Ordered roster. Order is preserved for display-name joining.
    #[validate(length(min = 1, message = "at least one participant is required"))]
    pub participant_ids: Vec<Uuid>,
}

/// Partial update for the two mutable attributes of a performance. Absent
/// fields are left untouched by a single parameterized update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdatePerformancePatch {
    pub item_number: Option<i32>,
    pub withdrawn: Option<bool>,
}

impl UpdatePerformancePatch {
    pub fn is_empty(&self) -> bool {
        self.item_number.is_none() && self.withdrawn.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_is_empty_only_when_both_fields_are_absent() {
        assert!(UpdatePerformancePatch::default().is_empty());
        assert!(
            !UpdatePerformancePatch {
                item_number: Some(12),
                ..Default::default()
            }
            .is_empty()
        );
        assert!(
            !UpdatePerformancePatch {
                withdrawn: Some(true),
                ..Default::default()
            }
            .is_empty()
        );
    }
}
