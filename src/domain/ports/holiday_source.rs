use crate::domain::errors::DomainResult;

/// Remote holiday calendar.
///
/// Returns `YYYY-MM-DD` strings. Every call must hit the source again: the
/// service never caches a calendar across computations.
#[async_trait::async_trait]
pub trait HolidaySource: Send + Sync {
    async fn fetch_holidays(&self) -> DomainResult<Vec<String>>;
}
