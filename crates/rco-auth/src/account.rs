//! Account records.

use rco_commerce::checkout::{Address, Order, PaymentMethod};
use rco_commerce::ids::{AddressId, OrderId, PaymentMethodId};
use serde::{Deserialize, Serialize};

/// A registered user.
///
/// The email is the identity key, compared case-insensitively. Accounts
/// are never hard-deleted; sign-out only clears the session pointer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    /// Display name.
    pub name: String,
    /// Identity key.
    pub email: String,
    /// Argon2 PHC string for the password.
    pub password_hash: String,
    /// Whether the email-verification step was completed. One-way: there
    /// is no path back to unverified.
    pub verified: bool,
    /// Phone number.
    pub phone: Option<String>,
    /// Date of birth, as entered.
    pub dob: Option<String>,
    /// Saved addresses.
    pub addresses: Vec<Address>,
    /// Saved payment methods.
    pub payment_methods: Vec<PaymentMethod>,
    /// Order history, oldest first.
    pub orders: Vec<Order>,
}

impl Account {
    /// Create an unverified account with empty lists.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password_hash: password_hash.into(),
            verified: false,
            phone: None,
            dob: None,
            addresses: Vec::new(),
            payment_methods: Vec::new(),
            orders: Vec::new(),
        }
    }

    /// Check whether this account's email matches, ignoring case.
    pub fn matches_email(&self, email: &str) -> bool {
        self.email.eq_ignore_ascii_case(email)
    }

    /// Look up an order by id.
    pub fn order(&self, id: &OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| &o.id == id)
    }

    /// The default address, if one is set.
    pub fn default_address(&self) -> Option<&Address> {
        self.addresses.iter().find(|a| a.is_default)
    }

    /// The default payment method, if one is set.
    pub fn default_payment_method(&self) -> Option<&PaymentMethod> {
        self.payment_methods.iter().find(|p| p.is_default)
    }

    /// Add an address. The first address becomes the default; marking a
    /// later one default clears the flag on the others, so at most one
    /// default ever exists.
    pub fn add_address(&mut self, mut address: Address) -> AddressId {
        if self.addresses.is_empty() {
            address.is_default = true;
        } else if address.is_default {
            self.clear_default_address();
        }
        let id = address.id;
        self.addresses.push(address);
        id
    }

    /// Remove an address by id.
    pub fn remove_address(&mut self, id: AddressId) -> bool {
        let before = self.addresses.len();
        self.addresses.retain(|a| a.id != id);
        self.addresses.len() < before
    }

    /// Mark an address as the default, clearing any previous default.
    pub fn set_default_address(&mut self, id: AddressId) -> bool {
        if !self.addresses.iter().any(|a| a.id == id) {
            return false;
        }
        for address in &mut self.addresses {
            address.is_default = address.id == id;
        }
        true
    }

    fn clear_default_address(&mut self) {
        for address in &mut self.addresses {
            address.is_default = false;
        }
    }

    /// Add a payment method, with the same single-default rule as
    /// addresses.
    pub fn add_payment_method(&mut self, mut method: PaymentMethod) -> PaymentMethodId {
        if self.payment_methods.is_empty() {
            method.is_default = true;
        } else if method.is_default {
            self.clear_default_payment_method();
        }
        let id = method.id;
        self.payment_methods.push(method);
        id
    }

    /// Remove a payment method by id.
    pub fn remove_payment_method(&mut self, id: PaymentMethodId) -> bool {
        let before = self.payment_methods.len();
        self.payment_methods.retain(|p| p.id != id);
        self.payment_methods.len() < before
    }

    /// Mark a payment method as the default, clearing any previous one.
    pub fn set_default_payment_method(&mut self, id: PaymentMethodId) -> bool {
        if !self.payment_methods.iter().any(|p| p.id == id) {
            return false;
        }
        for method in &mut self.payment_methods {
            method.is_default = method.id == id;
        }
        true
    }

    fn clear_default_payment_method(&mut self) {
        for method in &mut self.payment_methods {
            method.is_default = false;
        }
    }
}

/// A partial profile update, merged field-by-field into an account.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountPatch {
    /// New display name.
    pub name: Option<String>,
    /// New phone number.
    pub phone: Option<String>,
    /// New date of birth.
    pub dob: Option<String>,
}

impl AccountPatch {
    /// Apply the set fields to an account.
    pub fn apply(&self, account: &mut Account) {
        if let Some(name) = &self.name {
            account.name = name.clone();
        }
        if let Some(phone) = &self.phone {
            account.phone = Some(phone.clone());
        }
        if let Some(dob) = &self.dob {
            account.dob = Some(dob.clone());
        }
    }
}
