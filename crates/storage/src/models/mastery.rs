use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Competitive tier a performance is entered under. Selects both the
/// per-dancer registration fee rate and how a paid registration is matched.
/// Deserialization is the only way in, so an unknown level is rejected at
/// the boundary instead of defaulting anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MasteryLevel {
    Water,
    Fire,
}

impl MasteryLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Water => "water",
            Self::Fire => "fire",
        }
    }

    /// Human-readable label used in fee rationale strings.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Water => "Water (Beginner)",
            Self::Fire => "Fire (Advanced)",
        }
    }
}

impl fmt::Display for MasteryLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
