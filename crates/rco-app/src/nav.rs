//! The navigation controller.
//!
//! Tracks which page is active and the context it was opened with. Pure
//! state: rendering is someone else's job.

use rco_commerce::ids::{BrandId, CategoryId, OrderId, ProductId};
use serde::{Deserialize, Serialize};

/// Top-level pages of the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Page {
    #[default]
    Home,
    /// Product listing with filters.
    ProductList,
    /// Product detail.
    ProductDetail,
    Cart,
    Checkout,
    Confirmation,
    Wishlist,
    Admin,
    Help,
    Track,
    Returns,
    Story,
    Careers,
    Press,
    Profile,
    OrderDetails,
    Verify,
}

impl Page {
    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::ProductList => "plp",
            Page::ProductDetail => "pdp",
            Page::Cart => "cart",
            Page::Checkout => "checkout",
            Page::Confirmation => "confirmation",
            Page::Wishlist => "wishlist",
            Page::Admin => "admin",
            Page::Help => "help",
            Page::Track => "track",
            Page::Returns => "returns",
            Page::Story => "story",
            Page::Careers => "careers",
            Page::Press => "press",
            Page::Profile => "profile",
            Page::OrderDetails => "orderDetails",
            Page::Verify => "verify",
        }
    }

    /// Pages that require an active session.
    pub fn is_protected(&self) -> bool {
        matches!(self, Page::Profile | Page::OrderDetails | Page::Checkout)
    }
}

/// Data a page was opened with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageContext {
    /// Product to show on the detail page.
    pub product_id: Option<ProductId>,
    /// Category preselected on the listing page.
    pub category: Option<CategoryId>,
    /// Brand preselected on the listing page.
    pub brand: Option<BrandId>,
    /// Search text carried from the header search box.
    pub search_query: Option<String>,
    /// Category scope the header search ran in.
    pub search_category: Option<CategoryId>,
    /// Order to show on the details/confirmation page.
    pub order_id: Option<OrderId>,
    /// Email carried to the verification page.
    pub email: Option<String>,
}

impl PageContext {
    pub fn for_product(product_id: ProductId) -> Self {
        Self {
            product_id: Some(product_id),
            ..Default::default()
        }
    }

    pub fn for_order(order_id: OrderId) -> Self {
        Self {
            order_id: Some(order_id),
            ..Default::default()
        }
    }

    pub fn for_email(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            ..Default::default()
        }
    }
}

/// Which auth modal is open, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthPrompt {
    SignIn,
    SignUp,
}

/// Current page plus its context and any open auth modal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Navigator {
    page: Page,
    context: PageContext,
    auth_prompt: Option<AuthPrompt>,
}

impl Navigator {
    /// Start on the home page.
    pub fn new() -> Self {
        Self::default()
    }

    /// The active page.
    pub fn page(&self) -> Page {
        self.page
    }

    /// Context of the active page.
    pub fn context(&self) -> &PageContext {
        &self.context
    }

    /// The open auth modal, if any.
    pub fn auth_prompt(&self) -> Option<AuthPrompt> {
        self.auth_prompt
    }

    /// Switch pages. Session guarding happens in the application state,
    /// which owns the registry; this just records the switch.
    pub fn go(&mut self, page: Page, context: PageContext) {
        self.page = page;
        self.context = context;
    }

    /// Open an auth modal.
    pub fn prompt_auth(&mut self, prompt: AuthPrompt) {
        self.auth_prompt = Some(prompt);
    }

    /// Close any open auth modal.
    pub fn dismiss_auth(&mut self) {
        self.auth_prompt = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_home() {
        let nav = Navigator::new();
        assert_eq!(nav.page(), Page::Home);
        assert!(nav.auth_prompt().is_none());
    }

    #[test]
    fn test_protected_pages() {
        assert!(Page::Profile.is_protected());
        assert!(Page::OrderDetails.is_protected());
        assert!(Page::Checkout.is_protected());
        assert!(!Page::Cart.is_protected());
        assert!(!Page::Admin.is_protected());
    }

    #[test]
    fn test_go_replaces_context() {
        let mut nav = Navigator::new();
        nav.go(
            Page::ProductDetail,
            PageContext::for_product(ProductId::new(7)),
        );
        assert_eq!(nav.page(), Page::ProductDetail);
        assert_eq!(nav.context().product_id, Some(ProductId::new(7)));

        nav.go(Page::Cart, PageContext::default());
        assert!(nav.context().product_id.is_none());
    }

    #[test]
    fn test_page_strings() {
        assert_eq!(Page::ProductList.as_str(), "plp");
        assert_eq!(Page::OrderDetails.as_str(), "orderDetails");
    }
}
