use crate::domain::entities::{HolidaySet, WorkSchedule};
use crate::domain::errors::DomainResult;
use crate::domain::services::business_calendar::next_business_day;
use chrono::{DateTime, Duration, Timelike};
use chrono_tz::Tz;

/// Where the working segment containing the current instant ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SegmentEnd {
    LunchStart,
    WorkEnd,
}

/// Advance a normalized `start` by `business_minutes` of working time.
///
/// Only minutes inside working segments of business days are counted. Lunch
/// breaks, evenings, weekends and holidays are crossed without charge. A
/// duration that exactly fills a segment ends on the segment boundary.
pub fn consume(
    start: DateTime<Tz>,
    business_minutes: i64,
    holidays: &HolidaySet,
    schedule: &WorkSchedule,
) -> DomainResult<DateTime<Tz>> {
    let mut current = start;
    let mut remaining = business_minutes;

    while remaining > 0 {
        let date = current.date_naive();
        let hour = current.hour();

        let (segment_end, boundary) = if hour < schedule.lunch_start() {
            (
                SegmentEnd::LunchStart,
                schedule.at_hour(date, schedule.lunch_start())?,
            )
        } else if hour >= schedule.lunch_end() && hour < schedule.work_end() {
            (
                SegmentEnd::WorkEnd,
                schedule.at_hour(date, schedule.work_end())?,
            )
        } else {
            current = next_business_day(&current, holidays, schedule)?;
            continue;
        };

        // num_minutes truncates, so a partial minute before the boundary is dropped
        let available = (boundary - current).num_minutes();

        if remaining <= available {
            current += Duration::minutes(remaining);
            remaining = 0;
        } else {
            remaining -= available;
            current = match segment_end {
                SegmentEnd::LunchStart => schedule.at_hour(date, schedule.lunch_end())?,
                SegmentEnd::WorkEnd => next_business_day(&boundary, holidays, schedule)?,
            };
        }
    }

    Ok(current)
}
