//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use domain_inventory_store::StoreError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Input rejected before any remote call was made
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Store error (converting from library)
    #[error("{0}")]
    Store(#[from] StoreError),
}

impl CoreError {
    /// Whether it is expected behavior (user input, resource does not exist, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::ValidationError(_) => true,
            Self::Store(e) => e.is_expected(),
        }
    }

    /// Whether the store could not be reached or answered with something unreadable.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        match self {
            Self::ValidationError(_) => false,
            Self::Store(e) => e.is_transport(),
        }
    }

    /// Message the store attached to a rejection, if any.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::ValidationError(_) => None,
            Self::Store(e) => e.server_message(),
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Log a failed operation at `warn` or `error` depending on whether the
/// failure is expected.
pub(crate) fn log_failure(context: &str, err: &CoreError) {
    if err.is_expected() {
        log::warn!("{context}: {err}");
    } else {
        log::error!("{context}: {err}");
    }
}
