//! Per-test resource assembly: browser session → page → Page Objects, plus
//! the database and API client counterparts. Each test gets fully isolated
//! instances; the `with_*` wrappers guarantee teardown whatever the test
//! body does.

use crate::api::ApiClient;
use crate::config::{BrowserKind, Config};
use crate::core::Result;
use crate::db::DatabaseConnection;
use crate::logging;
use crate::pages::{AdminPage, BasePage, DashboardPage, LoginPage};
use futures_util::FutureExt;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::OnceLock;
use thirtyfour::prelude::*;
use thirtyfour::Capabilities;

static ANNOUNCED: OnceLock<()> = OnceLock::new();

// Logged once per process, mirroring what the suite is actually pointed at.
fn announce_environment(config: &Config) {
    ANNOUNCED.get_or_init(|| {
        logging::init_tracing();
        tracing::info!("Setting up test environment...");
        tracing::info!("Base URL: {}", config.base_url);
        tracing::info!("Headless mode: {}", config.browser.headless);
        tracing::info!("Browser: {:?}", config.browser.kind);
    });
}

/// One live browser session, owned by a single test.
///
/// Clones share the same underlying session handle; [`close`](Self::close)
/// ends the session for all of them.
#[derive(Clone)]
pub struct UiSession {
    driver: WebDriver,
}

impl UiSession {
    pub fn driver(&self) -> &WebDriver {
        &self.driver
    }

    /// The shared interaction capability over this session.
    pub fn base(&self) -> BasePage {
        BasePage::new(self.driver.clone())
    }

    pub fn login_page(&self) -> LoginPage {
        LoginPage::new(self.base())
    }

    pub fn dashboard_page(&self) -> DashboardPage {
        DashboardPage::new(self.base())
    }

    pub fn admin_page(&self) -> AdminPage {
        AdminPage::new(self.base())
    }

    /// Quit the browser session.
    pub async fn close(self) -> Result<()> {
        self.driver.quit().await?;
        Ok(())
    }
}

async fn launch_driver(config: &Config) -> Result<WebDriver> {
    let capabilities: Capabilities = match config.browser.kind {
        BrowserKind::Chromium => {
            let mut caps = DesiredCapabilities::chrome();
            if config.browser.headless {
                caps.set_headless()?;
            }
            caps.into()
        }
        BrowserKind::Firefox => {
            let mut caps = DesiredCapabilities::firefox();
            if config.browser.headless {
                caps.set_headless()?;
            }
            caps.into()
        }
    };
    let driver = WebDriver::new(&config.browser.webdriver_url, capabilities).await?;
    Ok(driver)
}

/// Fresh browser session per configuration.
pub async fn ui_session() -> Result<UiSession> {
    let config = Config::global();
    announce_environment(config);
    let driver = launch_driver(config).await?;
    Ok(UiSession { driver })
}

/// Browser session already navigated to the target and logged in with the
/// default credentials.
pub async fn authenticated_session() -> Result<UiSession> {
    let config = Config::global();
    let session = ui_session().await?;
    session.base().navigate_to(&config.base_url).await?;
    session
        .login_page()
        .login(&config.credentials.username, &config.credentials.password)
        .await?;
    Ok(session)
}

/// Database wrapper with `connect()` already attempted; callers check
/// `is_connected()` or the per-query outcomes.
pub async fn database() -> DatabaseConnection {
    announce_environment(Config::global());
    let mut db = DatabaseConnection::new();
    let _ = db.connect().await;
    db
}

/// Configured API client.
pub fn api_client() -> Result<ApiClient> {
    announce_environment(Config::global());
    ApiClient::new()
}

/// Run `test` against a fresh session, quitting the browser even when the
/// body panics; the panic is re-raised afterwards.
pub async fn with_ui_session<F, Fut, T>(test: F) -> Result<T>
where
    F: FnOnce(UiSession) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let session = ui_session().await?;
    run_with_session(session, test).await
}

/// Like [`with_ui_session`], starting from an already-authenticated session.
pub async fn with_authenticated_session<F, Fut, T>(test: F) -> Result<T>
where
    F: FnOnce(UiSession) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let session = authenticated_session().await?;
    run_with_session(session, test).await
}

async fn run_with_session<F, Fut, T>(session: UiSession, test: F) -> Result<T>
where
    F: FnOnce(UiSession) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let cleanup = session.clone();
    let outcome = AssertUnwindSafe(test(session)).catch_unwind().await;
    let closed = cleanup.close().await;
    match outcome {
        Ok(result) => {
            let value = result?;
            closed?;
            Ok(value)
        }
        Err(payload) => std::panic::resume_unwind(payload),
    }
}

/// Run `test` with a connected database wrapper and disconnect afterwards.
/// A panicking body drops the connection instead, which closes the socket.
pub async fn with_database<F, Fut, T>(test: F) -> T
where
    F: FnOnce(DatabaseConnection) -> Fut,
    Fut: Future<Output = (DatabaseConnection, T)>,
{
    let db = database().await;
    let (mut db, value) = test(db).await;
    db.disconnect().await;
    value
}
