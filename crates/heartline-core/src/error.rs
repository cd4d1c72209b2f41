use thiserror::Error;

/// Core error types for clinical record handling
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid FHIR DateTime: {0}")]
    InvalidDateTime(String),
}

impl CoreError {
    /// Create a new InvalidDateTime error
    pub fn invalid_date_time(datetime: impl Into<String>) -> Self {
        Self::InvalidDateTime(datetime.into())
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
