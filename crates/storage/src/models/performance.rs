use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PerformanceType {
    Solo,
    Duet,
    Trio,
    Group,
}

impl PerformanceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Solo => "solo",
            Self::Duet => "duet",
            Self::Trio => "trio",
            Self::Group => "group",
        }
    }
}

impl fmt::Display for PerformanceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One judged competition entry. Immutable after approval except for
/// item-number assignment and the withdrawn-from-judging flag.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Performance {
    pub performance_id: Uuid,
    pub event_id: Uuid,
    pub title: String,
    pub choreographer: Option<String>,
    pub age_category: String,
    pub performance_type: String,
    pub dance_style: String,
    pub mastery_level: String,
    pub region: String,
    pub contestant_name: Option<String>,
    pub item_number: Option<i32>,
    pub withdrawn: bool,
    pub created_at: chrono::NaiveDateTime,
}
