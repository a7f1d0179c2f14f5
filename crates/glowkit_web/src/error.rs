//! Error types for the DOM wiring.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors from attaching an enhancement to a document.
#[derive(Error, Debug)]
pub enum EnhanceError {
    #[error("document has no body")]
    MissingBody,

    #[error("DOM operation failed: {0}")]
    Dom(String),
}

/// Result type for enhancement operations.
pub type Result<T> = std::result::Result<T, EnhanceError>;

impl From<JsValue> for EnhanceError {
    fn from(value: JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
