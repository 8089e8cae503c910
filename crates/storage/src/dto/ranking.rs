use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::models::PerformanceType;

/// Field a partitioned ranking can be bucketed by. Buckets are keyed by the
/// composite of every requested field, in the order requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartitionField {
    Region,
    AgeCategory,
    PerformanceType,
    DanceStyle,
}

impl PartitionField {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "region" => Some(Self::Region),
            "age_category" => Some(Self::AgeCategory),
            "performance_type" => Some(Self::PerformanceType),
            "dance_style" => Some(Self::DanceStyle),
            _ => None,
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct RankingFilter {
    /// Comma-separated event ids; absent means all events.
    pub event_ids: Option<String>,
    pub age_category: Option<String>,
    pub performance_type: Option<PerformanceType>,
    pub region: Option<String>,
    /// Comma-separated partition fields; absent means one global ranking.
    pub partition_by: Option<String>,
}

impl RankingFilter {
    /// Event ids parsed from the query string. Tokens that are not valid
    /// uuids are dropped rather than rejected; a malformed filter degrades
    /// to no filtering.
    pub fn event_id_list(&self) -> Vec<Uuid> {
        self.event_ids
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .filter_map(|token| Uuid::parse_str(token.trim()).ok())
            .collect()
    }

    /// Requested partition fields, first occurrence wins. Unrecognized
    /// tokens are ignored; an empty result selects global mode.
    pub fn partition_fields(&self) -> Vec<PartitionField> {
        let mut fields = Vec::new();
        for token in self.partition_by.as_deref().unwrap_or_default().split(',') {
            if let Some(field) = PartitionField::parse(token.trim())
                && !fields.contains(&field)
            {
                fields.push(field);
            }
        }
        fields
    }
}

/// One row of ranking output, ordered and annotated with a medal tier.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RankingEntry {
    pub rank: i64,
    pub performance_id: Uuid,
    pub event_id: Uuid,
    pub title: String,
    pub contestant_name: String,
    pub age_category: String,
    pub performance_type: String,
    pub dance_style: String,
    pub region: String,
    pub item_number: Option<i32>,
    pub total_score: f64,
    pub average_score: f64,
    pub judge_count: i64,
    pub percentage: f64,
    pub medal: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_id_list_drops_malformed_tokens() {
        let id = Uuid::new_v4();
        let filter = RankingFilter {
            event_ids: Some(format!("{id}, not-a-uuid,")),
            ..Default::default()
        };
        assert_eq!(filter.event_id_list(), vec![id]);
    }

    #[test]
    fn partition_fields_ignores_unknown_and_duplicate_tokens() {
        let filter = RankingFilter {
            partition_by: Some("age_category,bogus,region,age_category".to_string()),
            ..Default::default()
        };
        assert_eq!(
            filter.partition_fields(),
            vec![PartitionField::AgeCategory, PartitionField::Region]
        );
    }

    #[test]
    fn absent_filters_select_everything() {
        let filter = RankingFilter::default();
        assert!(filter.event_id_list().is_empty());
        assert!(filter.partition_fields().is_empty());
    }
}
