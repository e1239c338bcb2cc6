pub mod date_override;
pub mod preferences;
