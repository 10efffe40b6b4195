use crate::core::{Result, SuiteError};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Main test-suite configuration
///
/// Resolved once per process from environment variables (a `.env` file is
/// loaded first if present); read-only afterwards. Every setting falls back
/// to a documented default when the variable is absent or empty.
#[derive(Debug, Clone)]
pub struct Config {
    pub browser: BrowserConfig,
    /// Target application under test.
    pub base_url: String,
    pub database: DatabaseConfig,
    pub api: ApiConfig,
    pub credentials: Credentials,
}

#[derive(Debug, Clone)]
pub struct BrowserConfig {
    pub headless: bool,
    pub kind: BrowserKind,
    /// WebDriver endpoint (chromedriver/geckodriver) the sessions talk to.
    pub webdriver_url: String,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

/// Default test credentials for the OrangeHRM demo instance.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Browser engine driven through WebDriver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserKind {
    Chromium,
    Firefox,
}

impl FromStr for BrowserKind {
    type Err = SuiteError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "chromium" | "chrome" => Ok(BrowserKind::Chromium),
            "firefox" => Ok(BrowserKind::Firefox),
            other => Err(SuiteError::configuration(format!(
                "Unsupported BROWSER_TYPE: {other}"
            ))),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// The process-wide configuration record.
    ///
    /// First access resolves the environment; malformed values abort the
    /// process here rather than being recovered later.
    pub fn global() -> &'static Config {
        CONFIG.get_or_init(|| Config::from_env().expect("Failed to load configuration"))
    }

    // Env-independent core so unit tests can exercise defaults and parse
    // failures without mutating shared process state.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        // An empty value counts as unset.
        let var = |key: &str, default: &str| -> String {
            match lookup(key) {
                Some(value) if !value.is_empty() => value,
                _ => default.to_string(),
            }
        };

        let config = Config {
            browser: BrowserConfig {
                headless: var("HEADLESS", "true").eq_ignore_ascii_case("true"),
                kind: var("BROWSER_TYPE", "chromium").parse()?,
                webdriver_url: var("WEBDRIVER_URL", "http://localhost:9515"),
            },
            base_url: var("BASE_URL", "https://opensource-demo.orangehrmlive.com/"),
            database: DatabaseConfig {
                host: var("MYSQL_HOST", "127.0.0.1"),
                port: var("MYSQL_PORT", "3306")
                    .parse()
                    .map_err(|_| SuiteError::configuration("Invalid MYSQL_PORT"))?,
                user: var("MYSQL_USER", "root"),
                password: var("MYSQL_PASSWORD", ""),
                database: var("MYSQL_DATABASE", "orangehrm"),
            },
            api: ApiConfig {
                base_url: var("API_BASE_URL", "https://opensource-demo.orangehrm.com/api"),
                timeout_secs: var("API_TIMEOUT", "30")
                    .parse()
                    .map_err(|_| SuiteError::configuration("Invalid API_TIMEOUT"))?,
            },
            credentials: Credentials {
                username: "Admin".to_string(),
                password: "admin123".to_string(),
            },
        };

        Ok(config)
    }
}
