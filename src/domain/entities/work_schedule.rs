use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;

pub const COLOMBIA_ZONE: Tz = chrono_tz::America::Bogota;

/// Upper bound on consecutive non-business days crossed while rolling over
pub const DEFAULT_MAX_LOOKAHEAD_DAYS: u32 = 60;

/// Fixed weekly work schedule of the local business zone.
///
/// A business day has two working segments, `[work_start, lunch_start)` and
/// `[lunch_end, work_end)`, expressed as whole local hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkSchedule {
    work_start: u32,
    lunch_start: u32,
    lunch_end: u32,
    work_end: u32,
    timezone: Tz,
    max_lookahead_days: u32,
}

impl WorkSchedule {
    pub fn new(
        work_start: u32,
        lunch_start: u32,
        lunch_end: u32,
        work_end: u32,
        timezone: Tz,
        max_lookahead_days: u32,
    ) -> DomainResult<Self> {
        if !(work_start < lunch_start && lunch_start < lunch_end && lunch_end < work_end && work_end < 24)
        {
            return Err(DomainError::Internal(format!(
                "Invalid work schedule {}-{}/{}-{}",
                work_start, lunch_start, lunch_end, work_end
            )));
        }
        if max_lookahead_days == 0 {
            return Err(DomainError::Internal(
                "Lookahead must be at least one day".to_string(),
            ));
        }

        Ok(Self {
            work_start,
            lunch_start,
            lunch_end,
            work_end,
            timezone,
            max_lookahead_days,
        })
    }

    /// 08:00-12:00 and 13:00-17:00 in America/Bogota
    pub fn colombia() -> Self {
        Self {
            work_start: 8,
            lunch_start: 12,
            lunch_end: 13,
            work_end: 17,
            timezone: COLOMBIA_ZONE,
            max_lookahead_days: DEFAULT_MAX_LOOKAHEAD_DAYS,
        }
    }

    pub fn with_max_lookahead_days(mut self, days: u32) -> Self {
        self.max_lookahead_days = days.max(1);
        self
    }

    pub fn work_start(&self) -> u32 {
        self.work_start
    }

    pub fn lunch_start(&self) -> u32 {
        self.lunch_start
    }

    pub fn lunch_end(&self) -> u32 {
        self.lunch_end
    }

    pub fn work_end(&self) -> u32 {
        self.work_end
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    pub fn max_lookahead_days(&self) -> u32 {
        self.max_lookahead_days
    }

    /// Working minutes in one business day (both segments)
    pub fn minutes_per_business_day(&self) -> i64 {
        let hours = (self.lunch_start - self.work_start) + (self.work_end - self.lunch_end);
        i64::from(hours) * 60
    }

    /// The instant at `hour:00:00` local time on `date`.
    pub fn at_hour(&self, date: NaiveDate, hour: u32) -> DomainResult<DateTime<Tz>> {
        let naive = date.and_hms_opt(hour, 0, 0).ok_or_else(|| {
            DomainError::Internal(format!("Hour {} is not a valid time of day", hour))
        })?;

        self.timezone
            .from_local_datetime(&naive)
            .earliest()
            .ok_or_else(|| {
                DomainError::Internal(format!(
                    "{} does not exist in {}",
                    naive,
                    self.timezone.name()
                ))
            })
    }

    pub fn to_local(&self, instant: DateTime<Utc>) -> DateTime<Tz> {
        instant.with_timezone(&self.timezone)
    }
}

impl Default for WorkSchedule {
    fn default() -> Self {
        Self::colombia()
    }
}
