use std::env;
use std::time::Duration;

pub const DEFAULT_HOLIDAYS_URL: &str = "https://content.capta.co/Recruitment/WorkingDays.json";

#[derive(Clone, Debug)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub holidays_url: String,
    pub holidays_timeout: Duration,
    pub otel_exporter_endpoint: Option<String>,
    pub service_name: String,
    pub metrics_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from any key lookup (environment, test maps)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_host = lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let server_port = lookup("SERVER_PORT")
            .or_else(|| lookup("PORT"))
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidPort)?;

        let holidays_url =
            lookup("HOLIDAYS_URL").unwrap_or_else(|| DEFAULT_HOLIDAYS_URL.to_string());
        if !(holidays_url.starts_with("http://") || holidays_url.starts_with("https://")) {
            return Err(ConfigError::InvalidHolidaysUrl(holidays_url));
        }

        let holidays_timeout_secs: u64 = lookup("HOLIDAYS_TIMEOUT_SECS")
            .unwrap_or_else(|| "10".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidTimeout)?;
        if holidays_timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout);
        }

        let otel_exporter_endpoint = lookup("OTEL_EXPORTER_OTLP_ENDPOINT");

        let service_name =
            lookup("SERVICE_NAME").unwrap_or_else(|| "business-hours".to_string());

        let metrics_port = lookup("METRICS_PORT")
            .unwrap_or_else(|| "9000".to_string())
            .parse()
            .unwrap_or(9000);

        Ok(Config {
            server_host,
            server_port,
            holidays_url,
            holidays_timeout: Duration::from_secs(holidays_timeout_secs),
            otel_exporter_endpoint,
            service_name,
            metrics_port,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("HOLIDAYS_URL must be an http(s) URL, got '{0}'")]
    InvalidHolidaysUrl(String),

    #[error("HOLIDAYS_TIMEOUT_SECS must be a positive number of seconds")]
    InvalidTimeout,
}
