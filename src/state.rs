use std::sync::Arc;
use crate::config::Config;
use crate::domain::services::availability_service::AvailabilityService;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub availability: Arc<AvailabilityService>,
}
