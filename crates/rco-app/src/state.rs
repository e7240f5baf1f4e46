//! Application state and its transition methods.

use rco_auth::{Account, AccountPatch, AccountRegistry, AuthError};
use rco_commerce::cart::{Cart, CartTotals};
use rco_commerce::catalog::{Catalog, Product};
use rco_commerce::checkout::{Address, Order, PaymentMethod};
use rco_commerce::error::CommerceError;
use rco_commerce::ids::{AddressId, CategoryId, OrderId, PaymentMethodId, ProductId};
use rco_commerce::review::{Review, ReviewStore};
use rco_commerce::search::{self, ProductQuery, Suggestion};
use rco_commerce::wishlist::Wishlist;
use rco_store::Store;
use tracing::{debug, info, warn};

use crate::error::AppError;
use crate::nav::{AuthPrompt, Navigator, Page, PageContext};
use crate::seed::seed_catalog;

/// Persisted key for the user registry.
const USERS_KEY: &str = "users";
/// Persisted key for the wishlist.
const WISHLIST_KEY: &str = "wishlist";
/// Persisted key for the active session's email.
const CURRENT_USER_KEY: &str = "currentUserEmail";

/// All top-level storefront state behind one mutation surface.
///
/// Views receive read slices and call the methods below to mutate;
/// cross-store cascades (product deletion, checkout) and persistence
/// writes happen here so no caller can forget them. Persistence is
/// best-effort: a failed write logs a warning and the in-memory change
/// stands.
pub struct AppState {
    catalog: Catalog,
    cart: Cart,
    wishlist: Wishlist,
    reviews: ReviewStore,
    accounts: AccountRegistry,
    nav: Navigator,
    store: Store,
}

impl AppState {
    /// Create the app over the built-in seed catalog, rehydrating
    /// persisted slices from the store.
    pub fn new(store: Store) -> Self {
        Self::with_catalog(seed_catalog(), store)
    }

    /// Create the app over a specific catalog.
    ///
    /// Users, wishlist, and the active session are rehydrated from the
    /// store; unreadable slices initialize empty. A stored session email
    /// that matches a registered account signs that user in silently.
    pub fn with_catalog(catalog: Catalog, store: Store) -> Self {
        let accounts = store
            .get::<Vec<Account>>(USERS_KEY)
            .map(AccountRegistry::from_accounts)
            .unwrap_or_default();
        let wishlist = store.get::<Wishlist>(WISHLIST_KEY).unwrap_or_default();

        let mut state = Self {
            catalog,
            cart: Cart::new(),
            wishlist,
            reviews: ReviewStore::new(),
            accounts,
            nav: Navigator::new(),
            store,
        };

        if let Some(email) = state.store.get::<String>(CURRENT_USER_KEY) {
            state.accounts.restore_session(&email);
        }

        state
    }

    // --- Read access -----------------------------------------------------

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn wishlist(&self) -> &Wishlist {
        &self.wishlist
    }

    pub fn reviews(&self) -> &ReviewStore {
        &self.reviews
    }

    pub fn accounts(&self) -> &AccountRegistry {
        &self.accounts
    }

    pub fn nav(&self) -> &Navigator {
        &self.nav
    }

    /// The signed-in account, if any.
    pub fn current_user(&self) -> Option<&Account> {
        self.accounts.current()
    }

    /// Cart badge count: sum of quantities.
    pub fn cart_item_count(&self) -> u32 {
        self.cart.item_count()
    }

    /// Wishlist badge count.
    pub fn wishlist_count(&self) -> usize {
        self.wishlist.len()
    }

    /// Cart price breakdown against the current catalog.
    pub fn cart_totals(&self) -> CartTotals {
        self.cart.totals(&self.catalog)
    }

    /// Run the filter/sort engine.
    pub fn search_products(&self, query: &ProductQuery) -> Vec<&Product> {
        search::search(&self.catalog, query)
    }

    /// Search-box suggestions.
    pub fn suggestions(&self, text: &str) -> Vec<Suggestion> {
        search::suggest(&self.catalog, text)
    }

    /// An order on the signed-in account. `None` doubles as the
    /// "not found" display state.
    pub fn order_details(&self, order_id: &OrderId) -> Option<&Order> {
        self.current_user().and_then(|u| u.order(order_id))
    }

    // --- Navigation ------------------------------------------------------

    /// Switch pages.
    ///
    /// Protected pages require a session; without one the app lands on
    /// home with the sign-in modal open instead.
    pub fn navigate_to(&mut self, page: Page, context: PageContext) {
        if page.is_protected() && !self.accounts.is_signed_in() {
            debug!(page = page.as_str(), "protected page without session");
            self.nav.go(Page::Home, PageContext::default());
            self.nav.prompt_auth(AuthPrompt::SignIn);
            return;
        }
        self.nav.go(page, context);
    }

    /// Open an auth modal.
    pub fn open_auth(&mut self, prompt: AuthPrompt) {
        self.nav.prompt_auth(prompt);
    }

    /// Close any open auth modal.
    pub fn dismiss_auth(&mut self) {
        self.nav.dismiss_auth();
    }

    // --- Auth ------------------------------------------------------------

    /// Register a new account and move to the verification step.
    pub fn sign_up(&mut self, name: &str, email: &str, password: &str) -> Result<(), AuthError> {
        self.accounts.sign_up(name, email, password)?;
        self.persist_users();
        self.nav.dismiss_auth();
        self.nav.go(Page::Verify, PageContext::for_email(email));
        Ok(())
    }

    /// Complete email verification; the account signs in and lands on
    /// the profile page. An unknown email changes nothing.
    pub fn verify(&mut self, email: &str) -> bool {
        if !self.accounts.verify(email) {
            return false;
        }
        self.persist_users();
        self.persist_session();
        self.nav.go(Page::Profile, PageContext::default());
        true
    }

    /// Sign in. Failures surface the reason and leave any existing
    /// session untouched.
    pub fn sign_in(&mut self, email: &str, password: &str) -> Result<(), AuthError> {
        self.accounts.sign_in(email, password)?;
        self.persist_session();
        self.nav.dismiss_auth();
        Ok(())
    }

    /// Sign out and return home. The account record stays.
    pub fn sign_out(&mut self) {
        self.accounts.sign_out();
        self.persist_session();
        self.nav.go(Page::Home, PageContext::default());
    }

    /// Merge a profile patch into the signed-in account.
    pub fn update_profile(&mut self, patch: &AccountPatch) -> Result<(), AuthError> {
        self.accounts.update_current(patch)?;
        self.persist_users();
        Ok(())
    }

    /// Save an address on the signed-in account.
    pub fn add_address(&mut self, address: Address) -> Result<AddressId, AuthError> {
        let id = self.accounts.current_account_mut()?.add_address(address);
        self.persist_users();
        Ok(id)
    }

    /// Remove a saved address.
    pub fn remove_address(&mut self, id: AddressId) -> Result<bool, AuthError> {
        let removed = self.accounts.current_account_mut()?.remove_address(id);
        self.persist_users();
        Ok(removed)
    }

    /// Make an address the default, clearing any previous default.
    pub fn set_default_address(&mut self, id: AddressId) -> Result<bool, AuthError> {
        let changed = self.accounts.current_account_mut()?.set_default_address(id);
        self.persist_users();
        Ok(changed)
    }

    /// Save a payment method on the signed-in account.
    pub fn add_payment_method(
        &mut self,
        method: PaymentMethod,
    ) -> Result<PaymentMethodId, AuthError> {
        let id = self.accounts.current_account_mut()?.add_payment_method(method);
        self.persist_users();
        Ok(id)
    }

    /// Remove a saved payment method.
    pub fn remove_payment_method(&mut self, id: PaymentMethodId) -> Result<bool, AuthError> {
        let removed = self
            .accounts
            .current_account_mut()?
            .remove_payment_method(id);
        self.persist_users();
        Ok(removed)
    }

    /// Make a payment method the default, clearing any previous default.
    pub fn set_default_payment_method(&mut self, id: PaymentMethodId) -> Result<bool, AuthError> {
        let changed = self
            .accounts
            .current_account_mut()?
            .set_default_payment_method(id);
        self.persist_users();
        Ok(changed)
    }

    // --- Cart and wishlist -----------------------------------------------

    /// Add a product to the cart. Unknown ids change nothing.
    pub fn add_to_cart(&mut self, product_id: ProductId, quantity: u32) -> bool {
        self.cart.add(&self.catalog, product_id, quantity)
    }

    /// Replace the cart with a single entry and head to checkout.
    pub fn buy_now(&mut self, product_id: ProductId, quantity: u32) -> bool {
        if !self.cart.buy_now(&self.catalog, product_id, quantity) {
            return false;
        }
        self.navigate_to(Page::Checkout, PageContext::default());
        true
    }

    /// Set an entry's quantity; below 1 removes it.
    pub fn update_cart_quantity(&mut self, product_id: ProductId, quantity: u32) {
        self.cart.update_quantity(product_id, quantity);
    }

    /// Remove a cart entry.
    pub fn remove_from_cart(&mut self, product_id: ProductId) -> bool {
        self.cart.remove(product_id)
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    /// Flip wishlist membership. Returns `true` if the id is now saved.
    pub fn toggle_wishlist(&mut self, product_id: ProductId) -> bool {
        let saved = self.wishlist.toggle(product_id);
        self.persist_wishlist();
        saved
    }

    // --- Reviews ---------------------------------------------------------

    /// Post a review for a product.
    pub fn add_review(
        &mut self,
        product_id: ProductId,
        user_name: &str,
        rating: u8,
        comment: &str,
    ) -> Result<(), CommerceError> {
        let review = Review::new(user_name, rating, comment)?;
        self.reviews.add(product_id, review);
        Ok(())
    }

    // --- Checkout --------------------------------------------------------

    /// Submit checkout: snapshot the cart into an order on the signed-in
    /// account and clear the cart.
    ///
    /// An empty cart redirects home and fails; since a successful
    /// placement empties the cart, this also makes a double submission a
    /// no-op rather than a duplicate order.
    pub fn place_order(
        &mut self,
        shipping_address: Address,
        payment_method: PaymentMethod,
    ) -> Result<OrderId, AppError> {
        if !self.accounts.is_signed_in() {
            return Err(AuthError::NotSignedIn.into());
        }
        if self.cart.is_empty() {
            self.nav.go(Page::Home, PageContext::default());
            return Err(CommerceError::EmptyCart.into());
        }

        let order = Order::place(&mut self.cart, &self.catalog, shipping_address, payment_method)?;
        let order_id = order.id.clone();
        let total = order.total;
        self.accounts.record_order(order)?;
        self.persist_users();

        info!(order_id = %order_id, total = %total, "order placed");
        self.nav
            .go(Page::Confirmation, PageContext::for_order(order_id.clone()));
        Ok(order_id)
    }

    // --- Admin catalog CRUD ----------------------------------------------

    /// Add a product to the catalog.
    pub fn add_product(&mut self, product: Product) -> ProductId {
        let id = self.catalog.add_product(product);
        info!(product_id = %id, "product added");
        id
    }

    /// Replace a product's fields.
    pub fn update_product(&mut self, product: Product) -> Result<(), CommerceError> {
        self.catalog.update_product(product)
    }

    /// Delete a product, cascading to the cart and wishlist.
    pub fn delete_product(&mut self, product_id: ProductId) -> bool {
        if self.catalog.remove_product(product_id).is_none() {
            return false;
        }
        self.cart.remove(product_id);
        self.wishlist.remove(product_id);
        self.persist_wishlist();
        info!(product_id = %product_id, "product deleted");
        true
    }

    /// Add a category; a name slugging to an existing id is rejected.
    pub fn add_category(
        &mut self,
        name: &str,
        image_url: &str,
    ) -> Result<CategoryId, CommerceError> {
        self.catalog.add_category(name, image_url)
    }

    /// Rename a category, keeping its id.
    pub fn rename_category(
        &mut self,
        id: &CategoryId,
        new_name: &str,
    ) -> Result<(), CommerceError> {
        self.catalog.rename_category(id, new_name)
    }

    /// Delete a category and every product in it, cascading each removed
    /// product out of the cart and wishlist.
    pub fn delete_category(&mut self, id: &CategoryId) -> Vec<ProductId> {
        let removed = self.catalog.remove_category(id);
        for product_id in &removed {
            self.cart.remove(*product_id);
            self.wishlist.remove(*product_id);
        }
        if !removed.is_empty() {
            self.persist_wishlist();
        }
        info!(category = %id, removed = removed.len(), "category deleted");
        removed
    }

    // --- Persistence -----------------------------------------------------

    fn persist_users(&mut self) {
        if let Err(e) = self.store.set(USERS_KEY, self.accounts.accounts()) {
            warn!(error = %e, "failed to persist users");
        }
    }

    fn persist_wishlist(&mut self) {
        if let Err(e) = self.store.set(WISHLIST_KEY, &self.wishlist) {
            warn!(error = %e, "failed to persist wishlist");
        }
    }

    fn persist_session(&mut self) {
        match self.accounts.current_email() {
            Some(email) => {
                let email = email.to_string();
                if let Err(e) = self.store.set(CURRENT_USER_KEY, &email) {
                    warn!(error = %e, "failed to persist session");
                }
            }
            None => {
                if let Err(e) = self.store.remove(CURRENT_USER_KEY) {
                    warn!(error = %e, "failed to clear persisted session");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> AppState {
        AppState::new(Store::in_memory())
    }

    fn first_product(app: &AppState) -> ProductId {
        app.catalog().products()[0].id
    }

    #[test]
    fn test_protected_navigation_redirects_home() {
        let mut app = app();
        app.navigate_to(Page::Profile, PageContext::default());

        assert_eq!(app.nav().page(), Page::Home);
        assert_eq!(app.nav().auth_prompt(), Some(AuthPrompt::SignIn));
    }

    #[test]
    fn test_navigation_allows_protected_with_session() {
        let mut app = app();
        app.sign_up("Ana", "ana@example.com", "pw-123456").unwrap();
        app.verify("ana@example.com");

        app.navigate_to(Page::Profile, PageContext::default());
        assert_eq!(app.nav().page(), Page::Profile);
    }

    #[test]
    fn test_sign_up_lands_on_verify_page() {
        let mut app = app();
        app.sign_up("Ana", "ana@example.com", "pw-123456").unwrap();

        assert_eq!(app.nav().page(), Page::Verify);
        assert_eq!(
            app.nav().context().email.as_deref(),
            Some("ana@example.com")
        );
        assert!(app.current_user().is_none());
    }

    #[test]
    fn test_buy_now_replaces_cart_and_checks_session() {
        let mut app = app();
        let first = first_product(&app);
        let second = app.catalog().products()[1].id;
        app.add_to_cart(first, 3);

        assert!(app.buy_now(second, 1));

        assert_eq!(app.cart().items().len(), 1);
        assert_eq!(app.cart().items()[0].product_id, second);
        // No session: buy-now bounced off the protected checkout page.
        assert_eq!(app.nav().page(), Page::Home);
        assert_eq!(app.nav().auth_prompt(), Some(AuthPrompt::SignIn));
    }

    #[test]
    fn test_delete_product_cascades() {
        let mut app = app();
        let id = first_product(&app);
        app.add_to_cart(id, 2);
        app.toggle_wishlist(id);

        assert!(app.delete_product(id));

        assert!(app.catalog().product(id).is_none());
        assert!(app.cart().is_empty());
        assert!(!app.wishlist().contains(id));
    }

    #[test]
    fn test_order_details_requires_session_and_match() {
        let app = app();
        assert!(app.order_details(&OrderId::new("RCO-0")).is_none());
    }
}
