pub mod fees;
pub mod performances;
pub mod rankings;
pub mod registration;
pub mod scores;
