pub mod availability;
pub mod booking;
pub mod date_override;
pub mod health;
pub mod preferences;
