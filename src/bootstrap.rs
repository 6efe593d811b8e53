use crate::application::services::BusinessTimeService;
use crate::config::Config;
use crate::domain::entities::WorkSchedule;
use crate::domain::ports::clock::Clock;
use crate::domain::ports::holiday_source::HolidaySource;
use crate::infrastructure::http::middleware::AppState;
use crate::infrastructure::providers::HttpHolidaySource;
use crate::infrastructure::runtime::SystemClock;
use std::sync::Arc;

pub fn build_app_state(config: &Config) -> Result<AppState, Box<dyn std::error::Error>> {
    let holiday_source = Arc::new(HttpHolidaySource::new(
        config.holidays_url.clone(),
        config.holidays_timeout,
    )?) as Arc<dyn HolidaySource>;
    tracing::info!(
        "Holiday source initialized ({}, timeout {}s)",
        config.holidays_url,
        config.holidays_timeout.as_secs()
    );

    let clock = Arc::new(SystemClock::new()) as Arc<dyn Clock>;

    let schedule = WorkSchedule::colombia();
    tracing::info!(
        "Work schedule {:02}:00-{:02}:00 / {:02}:00-{:02}:00 in {}",
        schedule.work_start(),
        schedule.lunch_start(),
        schedule.lunch_end(),
        schedule.work_end(),
        schedule.timezone().name()
    );

    let business_time_service = BusinessTimeService::new(holiday_source, clock, schedule);

    Ok(AppState::new(business_time_service))
}
