use crate::domain::entities::{
    BusinessTimeInput, BusinessTimeResult, DurationRequest, HolidaySet, WorkSchedule,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::clock::Clock;
use crate::domain::ports::holiday_source::HolidaySource;
use crate::domain::services::{consume, normalize};
use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Service that adds business days and hours to an instant under the
/// configured work schedule
#[derive(Clone)]
pub struct BusinessTimeService {
    holiday_source: Arc<dyn HolidaySource>,
    clock: Arc<dyn Clock>,
    schedule: WorkSchedule,
}

impl BusinessTimeService {
    pub fn new(
        holiday_source: Arc<dyn HolidaySource>,
        clock: Arc<dyn Clock>,
        schedule: WorkSchedule,
    ) -> Self {
        Self {
            holiday_source,
            clock,
            schedule,
        }
    }

    /// Add `days` business days and `hours` business hours to `date` (or now).
    ///
    /// Input is validated before the holiday calendar is fetched. The result
    /// is the final instant in UTC with second precision.
    #[tracing::instrument(skip(self, input), fields(days = ?input.days, hours = ?input.hours))]
    pub async fn add_business_time(
        &self,
        input: BusinessTimeInput,
    ) -> DomainResult<BusinessTimeResult> {
        let result = self.calculate(input).await;

        let outcome = match &result {
            Ok(_) => "ok",
            Err(e) => e.kind(),
        };
        metrics::counter!("business_time_calculations_total", "outcome" => outcome).increment(1);

        result
    }

    async fn calculate(&self, input: BusinessTimeInput) -> DomainResult<BusinessTimeResult> {
        let request = DurationRequest::new(input.days, input.hours)?;
        let requested_start = input.date.as_deref().map(parse_start_date).transpose()?;

        let holidays = self.load_holidays().await?;

        // "now" is read once the calendar is in hand
        let start_utc = requested_start.unwrap_or_else(|| self.clock.now());

        let start = self.schedule.to_local(start_utc);
        let normalized = normalize(start, &holidays, &self.schedule)?;
        if normalized != start {
            debug!("Start {} normalized to {}", start, normalized);
        }

        let minutes = request.business_minutes(&self.schedule);
        let end = consume(normalized, minutes, &holidays, &self.schedule)?;

        let date = end
            .with_timezone(&Utc)
            .to_rfc3339_opts(SecondsFormat::Secs, true);

        info!(
            "Added {} business minutes to {}: {}",
            minutes,
            start_utc.to_rfc3339_opts(SecondsFormat::Secs, true),
            date
        );

        Ok(BusinessTimeResult { date })
    }

    async fn load_holidays(&self) -> DomainResult<HolidaySet> {
        let started = Instant::now();
        let fetched = self.holiday_source.fetch_holidays().await;
        metrics::histogram!("holiday_fetch_duration_seconds")
            .record(started.elapsed().as_secs_f64());

        let holidays = fetched.and_then(|raw| HolidaySet::from_iso_dates(&raw));
        match &holidays {
            Ok(set) => {
                metrics::counter!("holiday_fetch_total", "outcome" => "ok").increment(1);
                debug!("Loaded {} holidays", set.len());
            }
            Err(e) => {
                metrics::counter!("holiday_fetch_total", "outcome" => "error").increment(1);
                warn!("Failed to load holiday calendar: {}", e);
            }
        }

        holidays
    }
}

/// Parse the caller's starting instant.
///
/// RFC 3339 timestamps with any offset are converted to UTC. A timestamp
/// without an offset, or a bare date, is read as UTC.
pub fn parse_start_date(raw: &str) -> DomainResult<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc())
        .ok_or_else(|| {
            DomainError::InvalidParameters(format!(
                "Parameter 'date' must be an ISO-8601 UTC timestamp, got '{}'",
                raw
            ))
        })
}
