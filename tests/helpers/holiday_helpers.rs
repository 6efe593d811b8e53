#![allow(dead_code)]
use async_trait::async_trait;
use business_hours::domain::errors::{DomainError, DomainResult};
use business_hours::domain::ports::holiday_source::HolidaySource;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Colombian holidays around Easter 2025 (Holy Thursday and Good Friday)
pub const EASTER_2025: [&str; 2] = ["2025-04-17", "2025-04-18"];

/// Holiday source that serves a fixed list and counts fetches
pub struct StaticHolidaySource {
    dates: Vec<String>,
    calls: AtomicUsize,
}

impl StaticHolidaySource {
    pub fn new(dates: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            dates: dates.iter().map(|d| d.to_string()).collect(),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HolidaySource for StaticHolidaySource {
    async fn fetch_holidays(&self) -> DomainResult<Vec<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.dates.clone())
    }
}

/// Holiday source that is always down
pub struct FailingHolidaySource;

#[async_trait]
impl HolidaySource for FailingHolidaySource {
    async fn fetch_holidays(&self) -> DomainResult<Vec<String>> {
        Err(DomainError::UpstreamUnavailable(
            "Connection failed: connection refused".to_string(),
        ))
    }
}
