//! Start-up failures.

use crate::core::config::ConfigError;
use thiserror::Error;

/// Errors raised while wiring the effects. None of them escape the page;
/// the entry point logs them to the console.
#[derive(Debug, Error)]
pub enum EffectsError {
    /// No global `window` (e.g. running in a worker).
    #[error("window is not available")]
    NoWindow,
    /// The window has no document.
    #[error("document is not available")]
    NoDocument,
    /// The inline override block is not valid JSON for the config shape.
    #[error("config block could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
    /// The override block decoded but fails validation.
    #[error("config block rejected: {0}")]
    Invalid(#[from] ConfigError),
}
