//! Application-level error type.

use rco_auth::AuthError;
use rco_commerce::CommerceError;
use thiserror::Error;

/// Union of the domain errors surfaced through [`crate::AppState`].
///
/// Both sides carry user-facing display text, so the presentation layer
/// can show `err.to_string()` for any variant.
#[derive(Error, Debug)]
pub enum AppError {
    /// Authentication or session failure.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Commerce-domain failure.
    #[error(transparent)]
    Commerce(#[from] CommerceError),
}
