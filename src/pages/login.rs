use crate::core::Result;
use crate::pages::base::{BasePage, Locator};

/// Page Object for the OrangeHRM login screen.
pub struct LoginPage {
    page: BasePage,
}

// Locators
const USERNAME_INPUT: Locator = Locator::XPath("//input[@name='username']");
const PASSWORD_INPUT: Locator = Locator::XPath("//input[@name='password']");
const LOGIN_BUTTON: Locator = Locator::XPath("//button[@type='submit']");
const ERROR_MESSAGE: Locator = Locator::Css(".oxd-alert-content--error");
const PAGE_TITLE: Locator = Locator::Css("h5.orangehrm-login-title");

impl LoginPage {
    pub fn new(page: BasePage) -> Self {
        Self { page }
    }

    pub fn page(&self) -> &BasePage {
        &self.page
    }

    pub async fn enter_username(&self, username: &str) -> Result<()> {
        // The login form renders lazily; wait for the first field.
        self.page.wait_for_element(USERNAME_INPUT).await?;
        self.page.fill(USERNAME_INPUT, username).await?;
        tracing::info!("Entered username: {username}");
        Ok(())
    }

    pub async fn enter_password(&self, password: &str) -> Result<()> {
        self.page.wait_for_element(PASSWORD_INPUT).await?;
        self.page.fill(PASSWORD_INPUT, password).await?;
        tracing::info!("Entered password");
        Ok(())
    }

    pub async fn click_login(&self) -> Result<()> {
        self.page.click(LOGIN_BUTTON).await?;
        tracing::info!("Clicked login button");
        Ok(())
    }

    /// Full login: username, password, submit, then wait for the
    /// post-navigation page to settle.
    pub async fn login(&self, username: &str, password: &str) -> Result<()> {
        self.enter_username(username).await?;
        self.enter_password(password).await?;
        self.click_login().await?;
        self.page.wait_for_page_load().await?;
        tracing::info!("Login performed for user: {username}");
        Ok(())
    }

    /// The alert text shown when login fails.
    pub async fn get_error_message(&self) -> Result<String> {
        self.page.wait_for_element(ERROR_MESSAGE).await?;
        self.page.get_text(ERROR_MESSAGE).await
    }

    pub async fn is_login_page_displayed(&self) -> bool {
        self.page.is_element_visible(PAGE_TITLE).await
    }
}
