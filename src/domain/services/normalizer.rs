use crate::domain::entities::{HolidaySet, WorkSchedule};
use crate::domain::errors::DomainResult;
use crate::domain::services::business_calendar::{is_business_day, next_business_day};
use chrono::{DateTime, Timelike};
use chrono_tz::Tz;

/// Move `instant` forward to the nearest instant that lies inside a working
/// segment of a business day. Instants already inside a segment are
/// returned unchanged.
pub fn normalize(
    instant: DateTime<Tz>,
    holidays: &HolidaySet,
    schedule: &WorkSchedule,
) -> DomainResult<DateTime<Tz>> {
    if !is_business_day(instant.date_naive(), holidays) {
        return next_business_day(&instant, holidays, schedule);
    }

    let date = instant.date_naive();
    let hour = instant.hour();

    if hour < schedule.work_start() {
        schedule.at_hour(date, schedule.work_start())
    } else if hour >= schedule.lunch_start() && hour < schedule.lunch_end() {
        schedule.at_hour(date, schedule.lunch_end())
    } else if hour >= schedule.work_end() {
        next_business_day(&instant, holidays, schedule)
    } else {
        Ok(instant)
    }
}
