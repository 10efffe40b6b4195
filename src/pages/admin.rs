use crate::core::Result;
use crate::pages::base::{BasePage, Locator};

/// Page Object for the OrangeHRM admin (system users) screen.
pub struct AdminPage {
    page: BasePage,
}

// Locators. The username filter is the second input in the filter form;
// the first belongs to the employee-name autocomplete.
const ADMIN_TITLE: Locator = Locator::Css("h6.oxd-topbar-header-breadcrumb-module");
const USERNAME_INPUT: Locator = Locator::XPath("(//div[@class='oxd-table-filter']//input)[2]");
const SEARCH_BUTTON: Locator = Locator::XPath("//button[@type='submit']");
const RESULTS_CONTAINER: Locator = Locator::Css("div.orangehrm-container");

impl AdminPage {
    pub fn new(page: BasePage) -> Self {
        Self { page }
    }

    pub fn page(&self) -> &BasePage {
        &self.page
    }

    pub async fn is_admin_page_loaded(&self) -> bool {
        self.page.is_element_visible(ADMIN_TITLE).await
    }

    /// Search the system-user list by username and wait for the result
    /// table to settle.
    pub async fn search_user(&self, username: &str) -> Result<()> {
        self.page.wait_for_element(USERNAME_INPUT).await?;
        self.page.fill(USERNAME_INPUT, username).await?;
        self.page.click(SEARCH_BUTTON).await?;
        self.page.wait_for_page_load().await?;
        self.page.wait_for_element(RESULTS_CONTAINER).await?;
        tracing::info!("Searched for user: {username}");
        Ok(())
    }
}
