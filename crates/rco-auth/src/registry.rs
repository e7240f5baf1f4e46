//! The account registry and session pointer.

use rco_commerce::checkout::Order;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::account::{Account, AccountPatch};
use crate::password::{hash_password, verify_password};
use crate::AuthError;

/// Registry of all known accounts plus the current session.
///
/// The session is the email of the signed-in account; everything else is
/// looked up through it, so registry updates are always visible to the
/// session without copying.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountRegistry {
    accounts: Vec<Account>,
    current_email: Option<String>,
}

impl AccountRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a registry from persisted accounts. No session is active
    /// until [`AccountRegistry::restore_session`] or a sign-in.
    pub fn from_accounts(accounts: Vec<Account>) -> Self {
        Self {
            accounts,
            current_email: None,
        }
    }

    /// All registered accounts.
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// The signed-in account, if any.
    pub fn current(&self) -> Option<&Account> {
        let email = self.current_email.as_deref()?;
        self.find(email)
    }

    /// Email of the signed-in account, if any.
    pub fn current_email(&self) -> Option<&str> {
        self.current_email.as_deref()
    }

    /// Check whether a session is active.
    pub fn is_signed_in(&self) -> bool {
        self.current().is_some()
    }

    fn find(&self, email: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.matches_email(email))
    }

    fn find_mut(&mut self, email: &str) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|a| a.matches_email(email))
    }

    /// Register a new account.
    ///
    /// Fails if any stored account has the same email, ignoring case. The
    /// new account starts unverified with empty lists; no session is
    /// established until it verifies.
    pub fn sign_up(
        &mut self,
        name: impl Into<String>,
        email: impl Into<String>,
        password: &str,
    ) -> Result<(), AuthError> {
        let email = email.into();
        if self.find(&email).is_some() {
            return Err(AuthError::AccountExists);
        }
        let password_hash = hash_password(password)?;
        self.accounts
            .push(Account::new(name, email.clone(), password_hash));
        info!(email = %email, "account created, awaiting verification");
        Ok(())
    }

    /// Complete email verification for an account.
    ///
    /// Stands in for the clicked link of a real verification email. An
    /// unknown email is a silent no-op. On success the account becomes
    /// the active session.
    ///
    /// Returns `true` if an account was verified.
    pub fn verify(&mut self, email: &str) -> bool {
        let Some(account) = self.find_mut(email) else {
            debug!(email = %email, "verify for unknown email ignored");
            return false;
        };
        account.verified = true;
        let canonical = account.email.clone();
        self.current_email = Some(canonical.clone());
        info!(email = %canonical, "account verified and signed in");
        true
    }

    /// Sign in.
    ///
    /// Checks run in a fixed order and the first failure wins: email
    /// existence, then password, then verification status. A failure
    /// leaves any existing session untouched.
    pub fn sign_in(&mut self, email: &str, password: &str) -> Result<(), AuthError> {
        let account = self.find(email).ok_or(AuthError::UnknownEmail)?;
        if !verify_password(password, &account.password_hash) {
            return Err(AuthError::IncorrectPassword);
        }
        if !account.verified {
            return Err(AuthError::NotVerified);
        }
        let canonical = account.email.clone();
        self.current_email = Some(canonical.clone());
        info!(email = %canonical, "signed in");
        Ok(())
    }

    /// Sign out. Clears the session pointer only; the account record is
    /// untouched.
    pub fn sign_out(&mut self) {
        if let Some(email) = self.current_email.take() {
            info!(email = %email, "signed out");
        }
    }

    /// Restore a persisted session by stored email.
    ///
    /// A stored email matching a registered account becomes the active
    /// session with no password re-check; anything else is ignored.
    pub fn restore_session(&mut self, email: &str) -> bool {
        match self.find(email) {
            Some(account) => {
                let canonical = account.email.clone();
                self.current_email = Some(canonical.clone());
                debug!(email = %canonical, "session restored");
                true
            }
            None => false,
        }
    }

    /// Merge a profile patch into the signed-in account.
    pub fn update_current(&mut self, patch: &AccountPatch) -> Result<(), AuthError> {
        let account = self.current_account_mut()?;
        patch.apply(account);
        Ok(())
    }

    /// Mutable access to the signed-in account for address, payment, and
    /// order updates.
    pub fn current_account_mut(&mut self) -> Result<&mut Account, AuthError> {
        let email = self
            .current_email
            .clone()
            .ok_or(AuthError::NotSignedIn)?;
        self.find_mut(&email).ok_or(AuthError::NotSignedIn)
    }

    /// Append an order to the signed-in account's history.
    pub fn record_order(&mut self, order: Order) -> Result<(), AuthError> {
        let account = self.current_account_mut()?;
        account.orders.push(order);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_with_verified_user() -> AccountRegistry {
        let mut registry = AccountRegistry::new();
        registry.sign_up("Ana", "ana@example.com", "pass-1234").unwrap();
        registry.verify("ana@example.com");
        registry.sign_out();
        registry
    }

    #[test]
    fn test_sign_up_rejects_duplicate_email_case_insensitive() {
        let mut registry = AccountRegistry::new();
        registry.sign_up("Ana", "ana@example.com", "pw1").unwrap();

        let err = registry.sign_up("Other", "ANA@EXAMPLE.COM", "pw2").unwrap_err();
        assert_eq!(err, AuthError::AccountExists);
        assert_eq!(registry.accounts().len(), 1);
    }

    #[test]
    fn test_sign_up_starts_unverified_without_session() {
        let mut registry = AccountRegistry::new();
        registry.sign_up("Ana", "ana@example.com", "pw").unwrap();

        assert!(!registry.accounts()[0].verified);
        assert!(!registry.is_signed_in());
    }

    #[test]
    fn test_verify_establishes_session() {
        let mut registry = AccountRegistry::new();
        registry.sign_up("Ana", "ana@example.com", "pw").unwrap();

        assert!(registry.verify("ANA@example.com"));
        assert!(registry.accounts()[0].verified);
        assert_eq!(registry.current().unwrap().email, "ana@example.com");
    }

    #[test]
    fn test_verify_unknown_email_is_silent() {
        let mut registry = AccountRegistry::new();
        assert!(!registry.verify("ghost@example.com"));
        assert!(!registry.is_signed_in());
    }

    #[test]
    fn test_sign_in_failure_order() {
        let mut registry = AccountRegistry::new();
        registry.sign_up("Ana", "ana@example.com", "right-password").unwrap();

        // Unknown email first.
        assert_eq!(
            registry.sign_in("ghost@example.com", "right-password"),
            Err(AuthError::UnknownEmail)
        );
        // Then password, even though the account is unverified.
        assert_eq!(
            registry.sign_in("ana@example.com", "wrong-password"),
            Err(AuthError::IncorrectPassword)
        );
        // Then verification status.
        assert_eq!(
            registry.sign_in("ana@example.com", "right-password"),
            Err(AuthError::NotVerified)
        );
    }

    #[test]
    fn test_sign_in_success_sets_session() {
        let mut registry = registry_with_verified_user();
        registry.sign_in("Ana@Example.com", "pass-1234").unwrap();
        assert_eq!(registry.current().unwrap().name, "Ana");
    }

    #[test]
    fn test_failed_sign_in_keeps_existing_session() {
        let mut registry = registry_with_verified_user();
        registry.sign_in("ana@example.com", "pass-1234").unwrap();

        assert_eq!(
            registry.sign_in("ana@example.com", "wrong"),
            Err(AuthError::IncorrectPassword)
        );
        assert_eq!(registry.current().unwrap().email, "ana@example.com");
    }

    #[test]
    fn test_sign_out_keeps_account() {
        let mut registry = registry_with_verified_user();
        registry.sign_in("ana@example.com", "pass-1234").unwrap();
        registry.sign_out();

        assert!(!registry.is_signed_in());
        assert_eq!(registry.accounts().len(), 1);
    }

    #[test]
    fn test_restore_session_skips_password() {
        let mut registry = registry_with_verified_user();
        assert!(registry.restore_session("ana@example.com"));
        assert!(registry.is_signed_in());

        assert!(!registry.restore_session("ghost@example.com"));
    }

    #[test]
    fn test_update_requires_session() {
        let mut registry = registry_with_verified_user();
        let patch = AccountPatch {
            name: Some("Ana Maria".to_string()),
            ..Default::default()
        };

        assert_eq!(registry.update_current(&patch), Err(AuthError::NotSignedIn));

        registry.sign_in("ana@example.com", "pass-1234").unwrap();
        registry.update_current(&patch).unwrap();
        assert_eq!(registry.current().unwrap().name, "Ana Maria");
        // The registry record changed too, not just a session copy.
        assert_eq!(registry.accounts()[0].name, "Ana Maria");
    }
}
