use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Dancer {
    pub dancer_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub studio: Option<String>,
    pub created_at: chrono::NaiveDateTime,
}

impl Dancer {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
