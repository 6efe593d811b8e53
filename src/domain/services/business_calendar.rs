use crate::domain::entities::{HolidaySet, WorkSchedule};
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Datelike, NaiveDate, Weekday};
use chrono_tz::Tz;

/// Weekdays that are not listed in the holiday calendar
pub fn is_business_day(date: NaiveDate, holidays: &HolidaySet) -> bool {
    !is_weekend(date) && !holidays.contains(&date)
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Work-start on the first business day strictly after the local date of
/// `instant`, skipping any chain of weekends and holidays.
pub fn next_business_day(
    instant: &DateTime<Tz>,
    holidays: &HolidaySet,
    schedule: &WorkSchedule,
) -> DomainResult<DateTime<Tz>> {
    let mut date = instant.date_naive();

    for _ in 0..schedule.max_lookahead_days() {
        date = date
            .succ_opt()
            .ok_or_else(|| DomainError::Internal("Calendar overflow".to_string()))?;

        if is_business_day(date, holidays) {
            return schedule.at_hour(date, schedule.work_start());
        }
    }

    Err(DomainError::NoBusinessDay {
        days: schedule.max_lookahead_days(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_weekdays_are_business_days() {
        let holidays = HolidaySet::empty();
        // 2025-04-07 is a Monday
        for day in 7..=11 {
            assert!(is_business_day(date(2025, 4, day), &holidays));
        }
    }

    #[test]
    fn test_weekend_is_not_a_business_day() {
        let holidays = HolidaySet::empty();
        assert!(!is_business_day(date(2025, 4, 12), &holidays));
        assert!(!is_business_day(date(2025, 4, 13), &holidays));
    }

    #[test]
    fn test_holiday_is_not_a_business_day() {
        let holidays = HolidaySet::new([date(2025, 4, 17), date(2025, 4, 18)]);
        assert!(!is_business_day(date(2025, 4, 17), &holidays));
        assert!(!is_business_day(date(2025, 4, 18), &holidays));
        assert!(is_business_day(date(2025, 4, 16), &holidays));
    }

    #[test]
    fn test_holiday_check_ignores_time_of_day() {
        let schedule = WorkSchedule::colombia();
        let holidays = HolidaySet::new([date(2025, 4, 17)]);

        // 23:00 local on the holiday is 04:00 UTC the next day
        let late = schedule.at_hour(date(2025, 4, 17), 23).unwrap();
        assert!(!is_business_day(late.date_naive(), &holidays));
    }

    #[test]
    fn test_next_business_day_skips_weekend() {
        let schedule = WorkSchedule::colombia();
        let friday = schedule.at_hour(date(2025, 4, 11), 17).unwrap();

        let next = next_business_day(&friday, &HolidaySet::empty(), &schedule).unwrap();
        assert_eq!(next.date_naive(), date(2025, 4, 14));
        assert_eq!(next.hour(), 8);
        assert_eq!(next.minute(), 0);
    }

    #[test]
    fn test_next_business_day_chains_holidays_and_weekend() {
        let schedule = WorkSchedule::colombia();
        let holidays = HolidaySet::new([date(2025, 4, 17), date(2025, 4, 18)]);
        let wednesday = schedule.at_hour(date(2025, 4, 16), 17).unwrap();

        let next = next_business_day(&wednesday, &holidays, &schedule).unwrap();
        assert_eq!(next.date_naive(), date(2025, 4, 21));
    }

    #[test]
    fn test_next_business_day_is_bounded() {
        let schedule = WorkSchedule::colombia().with_max_lookahead_days(10);
        let start = date(2025, 1, 1);
        let holidays = HolidaySet::new(start.iter_days().take(30));
        let instant = schedule.at_hour(start, 9).unwrap();

        let err = next_business_day(&instant, &holidays, &schedule).unwrap_err();
        assert_eq!(err, DomainError::NoBusinessDay { days: 10 });
    }
}
