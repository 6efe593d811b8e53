use crate::application::services::BusinessTimeService;

#[derive(Clone)]
pub struct AppState {
    pub business_time_service: BusinessTimeService,
}

impl AppState {
    pub fn new(business_time_service: BusinessTimeService) -> Self {
        Self {
            business_time_service,
        }
    }
}
