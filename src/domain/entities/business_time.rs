use crate::domain::entities::WorkSchedule;
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

/// Roughly a century of business days
pub const MAX_DAYS: u32 = 25_000;
pub const MAX_HOURS: u32 = MAX_DAYS * 8;

/// Raw calculation input, as handed over by the HTTP layer
#[derive(Debug, Clone, Default)]
pub struct BusinessTimeInput {
    pub days: Option<i64>,
    pub hours: Option<i64>,
    /// Starting instant, ISO-8601 in UTC. Defaults to now.
    pub date: Option<String>,
}

/// Final instant in UTC, second precision (`2025-04-21T20:00:00Z`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessTimeResult {
    pub date: String,
}

/// Validated amount of business time to add
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationRequest {
    days: u32,
    hours: u32,
}

impl DurationRequest {
    /// At least one of `days` / `hours` must be present and positive, and
    /// neither may be negative.
    pub fn new(days: Option<i64>, hours: Option<i64>) -> DomainResult<Self> {
        let days = bounded("days", days, MAX_DAYS)?;
        let hours = bounded("hours", hours, MAX_HOURS)?;

        if days == 0 && hours == 0 {
            return Err(DomainError::InvalidParameters(
                "At least one of the parameters 'days' or 'hours' must be provided and greater than zero"
                    .to_string(),
            ));
        }

        Ok(Self { days, hours })
    }

    /// Collapse to business minutes: one day is a full business day of the
    /// schedule, one hour is sixty minutes.
    pub fn business_minutes(&self, schedule: &WorkSchedule) -> i64 {
        i64::from(self.days) * schedule.minutes_per_business_day() + i64::from(self.hours) * 60
    }
}

fn bounded(name: &str, value: Option<i64>, max: u32) -> DomainResult<u32> {
    match value {
        None => Ok(0),
        Some(v) if v < 0 => Err(DomainError::InvalidParameters(format!(
            "Parameter '{}' must be a non-negative integer, got {}",
            name, v
        ))),
        Some(v) if v > i64::from(max) => Err(DomainError::InvalidParameters(format!(
            "Parameter '{}' must not exceed {}, got {}",
            name, max, v
        ))),
        Some(v) => Ok(v as u32),
    }
}
