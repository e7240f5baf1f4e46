//! Authentication errors.
//!
//! Sign-in failures are deliberately distinct — unknown email, wrong
//! password, unverified account — and each variant's display text is the
//! exact message the presentation layer shows.

use thiserror::Error;

/// Authentication error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Sign-up with an email that is already registered.
    #[error("An account with this email already exists.")]
    AccountExists,

    /// Sign-in with an email no account matches.
    #[error("No account found with that email.")]
    UnknownEmail,

    /// Sign-in with the wrong password.
    #[error("Incorrect password.")]
    IncorrectPassword,

    /// Sign-in before the account was verified.
    #[error("Account not verified. Please check your email.")]
    NotVerified,

    /// An operation that needs a session was called without one.
    #[error("No user is signed in.")]
    NotSignedIn,

    /// Credential hashing failed.
    #[error("internal error: {0}")]
    Hashing(String),
}

impl AuthError {
    /// Check if this is one of the three sign-in failure reasons.
    pub fn is_sign_in_failure(&self) -> bool {
        matches!(
            self,
            AuthError::UnknownEmail | AuthError::IncorrectPassword | AuthError::NotVerified
        )
    }
}
