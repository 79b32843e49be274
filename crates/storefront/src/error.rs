//! Unified error handling.
//!
//! Provides a unified `StorefrontError` type. Event handlers return
//! `Result<()>` and the bootstrap layer logs failures with [`report`] instead
//! of surfacing them: every failure degrades to inaction.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// A DOM call threw.
    #[error("DOM error: {0}")]
    Dom(String),

    /// No `window` or `document` (not running in a page).
    #[error("No browser context: {0}")]
    NoBrowserContext(&'static str),
}

impl From<JsValue> for StorefrontError {
    fn from(value: JsValue) -> Self {
        Self::Dom(
            value
                .as_string()
                .unwrap_or_else(|| format!("{value:?}")),
        )
    }
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;

/// Log a failed handler result and carry on.
pub fn report(context: &str, result: Result<()>) {
    if let Err(e) = result {
        tracing::warn!(error = %e, "{context} failed");
    }
}
