use crate::domain::errors::{DomainError, DomainResult};
use chrono::NaiveDate;
use std::collections::HashSet;

/// Holiday calendar for a single computation.
///
/// Dates carry no time component; membership is decided by local calendar
/// date only. The set is built fresh for every request and never cached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidaySet {
    dates: HashSet<NaiveDate>,
}

impl HolidaySet {
    pub fn new(dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self {
            dates: dates.into_iter().collect(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a set from `YYYY-MM-DD` strings as served by the holiday source.
    ///
    /// A single malformed entry rejects the whole payload: silently dropping
    /// it would change computed results.
    pub fn from_iso_dates<S: AsRef<str>>(raw: &[S]) -> DomainResult<Self> {
        let mut dates = HashSet::with_capacity(raw.len());
        for entry in raw {
            let entry = entry.as_ref().trim();
            let date = NaiveDate::parse_from_str(entry, "%Y-%m-%d").map_err(|e| {
                DomainError::UpstreamUnavailable(format!(
                    "Malformed holiday date '{}': {}",
                    entry, e
                ))
            })?;
            dates.insert(date);
        }
        Ok(Self { dates })
    }

    pub fn contains(&self, date: &NaiveDate) -> bool {
        self.dates.contains(date)
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}
