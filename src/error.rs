//! Error types.
//!
//! Two layers:
//!
//! - [`FetchError`] describes why a single series produced no summary. It never
//!   leaves the library: the fetcher logs it and degrades to `None`.
//! - [`AppError`] is what the binary exits with.

use thiserror::Error;

/// Exit code for invalid arguments or missing configuration.
pub const EXIT_CONFIG: u8 = 2;
/// Exit code when no indicator could be fetched.
pub const EXIT_NO_DATA: u8 = 4;
/// Exit code for local failures (runtime start-up, output serialization).
pub const EXIT_INTERNAL: u8 = 5;

/// Per-series failure while fetching or shaping observations.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("upstream returned status {0}")]
    Status(u16),

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("response contained no observations")]
    NoObservations,

    /// Latest value is empty or the `"."` sentinel.
    #[error("latest observation has no value")]
    MissingValue,

    #[error("invalid observation value '{0}'")]
    InvalidValue(String),
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(EXIT_CONFIG, message)
    }

    pub fn no_data(message: impl Into<String>) -> Self {
        Self::new(EXIT_NO_DATA, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(EXIT_INTERNAL, message)
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_error_constructors_carry_exit_codes() {
        assert_eq!(AppError::config("x").exit_code(), EXIT_CONFIG);
        assert_eq!(AppError::no_data("x").exit_code(), EXIT_NO_DATA);
        assert_eq!(AppError::internal("x").exit_code(), EXIT_INTERNAL);
        assert_eq!(AppError::no_data("nothing fetched").to_string(), "nothing fetched");
    }

    #[test]
    fn fetch_error_messages() {
        assert_eq!(FetchError::Status(503).to_string(), "upstream returned status 503");
        assert_eq!(
            FetchError::InvalidValue("abc".to_string()).to_string(),
            "invalid observation value 'abc'"
        );
    }
}
