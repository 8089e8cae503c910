use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::MasteryLevel;

/// Per-dancer record of the one-time registration fee. A dancer with no
/// stored row reads as unpaid.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct RegistrationFeeRecord {
    pub dancer_id: Uuid,
    pub paid: bool,
    pub paid_mastery_level: Option<String>,
    pub paid_at: Option<chrono::NaiveDateTime>,
}

impl RegistrationFeeRecord {
    pub fn unpaid(dancer_id: Uuid) -> Self {
        Self {
            dancer_id,
            paid: false,
            paid_mastery_level: None,
            paid_at: None,
        }
    }

    /// A payment only satisfies the mastery level it was made under.
    pub fn satisfies(&self, level: MasteryLevel) -> bool {
        self.paid && self.paid_mastery_level.as_deref() == Some(level.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unpaid_record_satisfies_nothing() {
        let record = RegistrationFeeRecord::unpaid(Uuid::new_v4());
        assert!(!record.satisfies(MasteryLevel::Water));
        assert!(!record.satisfies(MasteryLevel::Fire));
    }

    #[test]
    fn payment_is_bound_to_its_mastery_level() {
        let record = RegistrationFeeRecord {
            dancer_id: Uuid::new_v4(),
            paid: true,
            paid_mastery_level: Some("water".to_string()),
            paid_at: None,
        };
        assert!(record.satisfies(MasteryLevel::Water));
        assert!(!record.satisfies(MasteryLevel::Fire));
    }
}
