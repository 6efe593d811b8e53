use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::holiday_source::HolidaySource;
use reqwest::Client;
use std::time::Duration;
use tracing::{info, warn};

/// Holiday calendar served as a JSON array of `YYYY-MM-DD` strings
pub struct HttpHolidaySource {
    url: String,
    timeout: Duration,
    http_client: Client,
}

impl HttpHolidaySource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> DomainResult<Self> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            url: url.into(),
            timeout,
            http_client,
        })
    }
}

#[async_trait::async_trait]
impl HolidaySource for HttpHolidaySource {
    #[tracing::instrument(skip(self), fields(url = %self.url))]
    async fn fetch_holidays(&self) -> DomainResult<Vec<String>> {
        let response = self.http_client.get(&self.url).send().await.map_err(|e| {
            let error_msg = if e.is_timeout() {
                format!("Request timed out after {:?}: {}", self.timeout, e)
            } else if e.is_connect() {
                format!("Connection failed: {}", e)
            } else {
                format!("Network error: {}", e)
            };
            warn!("Holiday fetch from {} failed: {}", self.url, error_msg);
            DomainError::UpstreamUnavailable(error_msg)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Holiday source {} returned status {}", self.url, status);
            return Err(DomainError::UpstreamUnavailable(format!(
                "Holiday source returned HTTP {}",
                status.as_u16()
            )));
        }

        let holidays: Vec<String> = response.json().await.map_err(|e| {
            DomainError::UpstreamUnavailable(format!("Invalid holiday payload: {}", e))
        })?;

        info!("Fetched {} holidays from {}", holidays.len(), self.url);
        Ok(holidays)
    }
}
