use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{0}")]
    InvalidParameters(String),
    #[error("Holiday calendar unavailable: {0}")]
    UpstreamUnavailable(String),
    #[error("No business day found within {days} days")]
    NoBusinessDay { days: u32 },
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Stable name used in error payloads and metric labels
    pub fn kind(&self) -> &'static str {
        match self {
            DomainError::InvalidParameters(_) => "InvalidParameters",
            DomainError::UpstreamUnavailable(_) => "UpstreamUnavailable",
            DomainError::NoBusinessDay { .. } => "NoBusinessDay",
            DomainError::Internal(_) => "Internal",
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
