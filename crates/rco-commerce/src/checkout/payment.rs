//! Payment method types.
//!
//! Simulation data only: no card number ever exists here, just the
//! display fields a wallet page shows.

use crate::ids::PaymentMethodId;
use serde::{Deserialize, Serialize};

/// Kind of saved payment method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentKind {
    #[default]
    CreditCard,
    PayPal,
}

impl PaymentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentKind::CreditCard => "Credit Card",
            PaymentKind::PayPal => "PayPal",
        }
    }
}

/// A saved payment method.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaymentMethod {
    /// Unique identifier.
    pub id: PaymentMethodId,
    /// Kind of payment method.
    pub kind: PaymentKind,
    /// Provider display name (e.g., "Visa").
    pub provider: String,
    /// Last four digits shown in the wallet list.
    pub last4: String,
    /// Expiry display string (e.g., "12/27").
    pub expiry: String,
    /// Whether this is the account's default method.
    pub is_default: bool,
}

impl PaymentMethod {
    /// Create a new payment method with a fresh id.
    pub fn new(
        kind: PaymentKind,
        provider: impl Into<String>,
        last4: impl Into<String>,
        expiry: impl Into<String>,
    ) -> Self {
        Self {
            id: PaymentMethodId::generate(),
            kind,
            provider: provider.into(),
            last4: last4.into(),
            expiry: expiry.into(),
            is_default: false,
        }
    }

    /// Wallet display label, e.g. "Visa ending in 4242".
    pub fn display_label(&self) -> String {
        format!("{} ending in {}", self.provider, self.last4)
    }
}
