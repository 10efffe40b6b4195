use crate::core::Result;
use crate::pages::base::{BasePage, Locator};

/// Page Object for the OrangeHRM dashboard.
pub struct DashboardPage {
    page: BasePage,
}

// Locators
const DASHBOARD_TITLE: Locator =
    Locator::XPath("//h6[contains(@class, 'oxd-topbar-header-breadcrumb-module') and normalize-space()='Dashboard']");
const USER_PROFILE_DROPDOWN: Locator = Locator::Css("img.oxd-userdropdown-img");
const LOGOUT_BUTTON: Locator = Locator::XPath("//a[@href='/web/index.php/auth/logout']");
const WELCOME_MESSAGE: Locator = Locator::XPath("//h6[contains(text(), 'Welcome')]");

impl DashboardPage {
    pub fn new(page: BasePage) -> Self {
        Self { page }
    }

    pub fn page(&self) -> &BasePage {
        &self.page
    }

    pub async fn is_dashboard_loaded(&self) -> bool {
        self.page.is_element_visible(DASHBOARD_TITLE).await
    }

    pub async fn click_user_profile(&self) -> Result<()> {
        self.page.wait_for_element(USER_PROFILE_DROPDOWN).await?;
        self.page.click(USER_PROFILE_DROPDOWN).await?;
        tracing::info!("Clicked user profile dropdown");
        Ok(())
    }

    pub async fn click_logout(&self) -> Result<()> {
        // The menu entry only exists once the dropdown is open.
        self.page.wait_for_element(LOGOUT_BUTTON).await?;
        self.page.click(LOGOUT_BUTTON).await?;
        tracing::info!("Clicked logout button");
        Ok(())
    }

    /// Full logout through the profile dropdown.
    pub async fn logout(&self) -> Result<()> {
        self.click_user_profile().await?;
        self.click_logout().await?;
        self.page.wait_for_page_load().await?;
        tracing::info!("Logged out");
        Ok(())
    }

    pub async fn get_welcome_message(&self) -> Result<String> {
        self.page.get_text(WELCOME_MESSAGE).await
    }

    pub async fn get_page_title(&self) -> Result<String> {
        self.page.get_page_title().await
    }

    pub async fn get_page_url(&self) -> Result<String> {
        self.page.get_page_url().await
    }
}
