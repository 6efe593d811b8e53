#![allow(dead_code)]
use business_hours::domain::entities::{BusinessTimeInput, WorkSchedule};
use business_hours::domain::ports::clock::Clock;
use business_hours::domain::ports::holiday_source::HolidaySource;
use business_hours::infrastructure::runtime::FixedClock;
use business_hours::BusinessTimeService;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Thursday 2025-04-10 10:00 in Bogota
pub const DEFAULT_NOW: &str = "2025-04-10T15:00:00Z";

pub fn utc(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw)
        .expect("Invalid test timestamp")
        .with_timezone(&Utc)
}

pub fn create_test_service(
    holiday_source: Arc<dyn HolidaySource>,
    now: &str,
) -> BusinessTimeService {
    let clock = Arc::new(FixedClock::new(utc(now))) as Arc<dyn Clock>;
    BusinessTimeService::new(holiday_source, clock, WorkSchedule::colombia())
}

pub fn input(days: Option<i64>, hours: Option<i64>, date: Option<&str>) -> BusinessTimeInput {
    BusinessTimeInput {
        days,
        hours,
        date: date.map(String::from),
    }
}
