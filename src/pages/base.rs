use crate::core::{Result, SuiteError};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thirtyfour::prelude::*;
use tokio::time::{sleep, Instant};

/// Default budget for element waits.
pub const DEFAULT_WAIT: Duration = Duration::from_secs(5);
/// Short budget used by visibility probes.
pub const VISIBILITY_WAIT: Duration = Duration::from_secs(2);

const POLL_INTERVAL: Duration = Duration::from_millis(250);
const SCREENSHOT_DIR: &str = "reports/screenshots";

/// Address of one element within a rendered page.
///
/// Exactly one selector strategy per element: CSS for class-addressed
/// elements, XPath for attribute-, text- or position-addressed ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locator {
    Css(&'static str),
    XPath(&'static str),
}

impl Locator {
    pub fn by(&self) -> By {
        match *self {
            Locator::Css(selector) => By::Css(selector),
            Locator::XPath(selector) => By::XPath(selector),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match *self {
            Locator::Css(selector) | Locator::XPath(selector) => selector,
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shared navigation/interaction capability over one browser session.
///
/// Page Objects hold a clone of this instead of inheriting from it; the
/// underlying `WebDriver` is a cheap handle to the same session. All waits
/// can time out; only [`is_element_visible`](Self::is_element_visible)
/// converts a timeout into a boolean, every other operation propagates the
/// failure to the test.
#[derive(Clone)]
pub struct BasePage {
    driver: WebDriver,
}

impl BasePage {
    pub fn new(driver: WebDriver) -> Self {
        Self { driver }
    }

    pub fn driver(&self) -> &WebDriver {
        &self.driver
    }

    pub async fn navigate_to(&self, url: &str) -> Result<()> {
        self.driver.goto(url).await?;
        tracing::info!("Navigated to {url}");
        Ok(())
    }

    pub async fn click(&self, locator: Locator) -> Result<()> {
        self.driver.find(locator.by()).await?.click().await?;
        tracing::info!("Clicked on {locator}");
        Ok(())
    }

    /// Replace the input's content with `text`.
    pub async fn fill(&self, locator: Locator, text: &str) -> Result<()> {
        let element = self.driver.find(locator.by()).await?;
        element.clear().await?;
        element.send_keys(text).await?;
        tracing::info!("Filled {locator} with {text}");
        Ok(())
    }

    pub async fn get_text(&self, locator: Locator) -> Result<String> {
        let text = self.driver.find(locator.by()).await?.text().await?;
        tracing::info!("Got text from {locator}: {text}");
        Ok(text)
    }

    /// Wait up to [`DEFAULT_WAIT`] for the element to be displayed.
    pub async fn wait_for_element(&self, locator: Locator) -> Result<WebElement> {
        self.wait_for_element_within(locator, DEFAULT_WAIT).await
    }

    /// Poll for a displayed element until `timeout` elapses.
    pub async fn wait_for_element_within(
        &self,
        locator: Locator,
        timeout: Duration,
    ) -> Result<WebElement> {
        let deadline = Instant::now() + timeout;
        loop {
            if let Ok(element) = self.driver.find(locator.by()).await {
                if element.is_displayed().await.unwrap_or(false) {
                    tracing::info!("Element {locator} is visible");
                    return Ok(element);
                }
            }
            if Instant::now() >= deadline {
                return Err(SuiteError::element_timeout(locator.as_str(), timeout));
            }
            sleep(POLL_INTERVAL).await;
        }
    }

    /// Visibility probe: a short wait whose failures all become `false`.
    pub async fn is_element_visible(&self, locator: Locator) -> bool {
        self.wait_for_element_within(locator, VISIBILITY_WAIT)
            .await
            .is_ok()
    }

    /// Wait for the document to finish loading.
    ///
    /// Stands in for a network-idle wait after navigation-triggering actions
    /// (login submit, search).
    pub async fn wait_for_page_load(&self) -> Result<()> {
        let deadline = Instant::now() + DEFAULT_WAIT;
        loop {
            let ready = self
                .driver
                .execute("return document.readyState", Vec::<serde_json::Value>::new())
                .await?;
            if ready.json().as_str() == Some("complete") {
                tracing::info!("Page finished loading");
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(SuiteError::element_timeout(
                    "document.readyState == complete",
                    DEFAULT_WAIT,
                ));
            }
            sleep(POLL_INTERVAL).await;
        }
    }

    /// Save a PNG under `reports/screenshots/<filename>.png`.
    pub async fn take_screenshot(&self, filename: &str) -> Result<PathBuf> {
        fs::create_dir_all(SCREENSHOT_DIR)?;
        let path = Path::new(SCREENSHOT_DIR).join(format!("{filename}.png"));
        self.driver.screenshot(&path).await?;
        tracing::info!("Screenshot saved as {filename}");
        Ok(path)
    }

    pub async fn get_page_title(&self) -> Result<String> {
        let title = self.driver.title().await?;
        tracing::info!("Page title: {title}");
        Ok(title)
    }

    pub async fn get_page_url(&self) -> Result<String> {
        let url = self.driver.current_url().await?.to_string();
        tracing::info!("Current URL: {url}");
        Ok(url)
    }
}
