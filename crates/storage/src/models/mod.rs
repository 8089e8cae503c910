mod dancer;
mod mastery;
mod performance;
mod registration_fee;
mod score;

pub use dancer::Dancer;
pub use mastery::MasteryLevel;
pub use performance::{Performance, PerformanceType};
pub use registration_fee::RegistrationFeeRecord;
pub use score::Score;
