pub mod availability;
pub mod availability_service;
pub mod capacity;
pub mod season;
pub mod time_slots;
pub mod validation;
