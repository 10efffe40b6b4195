use std::time::Duration;

/// Suite-wide Result type
pub type Result<T> = std::result::Result<T, SuiteError>;

/// Main suite error type
///
/// Only hard failures live here: anything the suite recovers from locally
/// (DB connect, HTTP transport) is reported through
/// [`Outcome`](crate::core::Outcome) instead.
#[derive(thiserror::Error, Debug)]
pub enum SuiteError {
    /// Configuration errors (missing or malformed settings)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// WebDriver protocol or session errors
    #[error("WebDriver error: {0}")]
    WebDriver(#[from] thirtyfour::error::WebDriverError),

    /// An element did not become visible within the wait budget
    #[error("timed out after {waited:?} waiting for element {locator}")]
    ElementTimeout { locator: String, waited: Duration },

    /// HTTP client construction errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Filesystem errors (log files, screenshots)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// Helper functions for common error scenarios
impl SuiteError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        SuiteError::Configuration(msg.into())
    }

    pub fn element_timeout(locator: impl Into<String>, waited: Duration) -> Self {
        SuiteError::ElementTimeout {
            locator: locator.into(),
            waited,
        }
    }
}
