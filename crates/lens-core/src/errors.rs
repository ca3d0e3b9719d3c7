//! Cross-cutting error types for Truth Lens.
//!
//! Component-specific errors (`DatabaseError`, `CatalogError`, ...) live in
//! their own crates. `lens-cli` is where they all converge.

use thiserror::Error;

/// Errors that can be raised by any Truth Lens crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A barcode was shorter than the accepted minimum.
    #[error("Barcode '{barcode}' is too short (minimum {min} characters)")]
    BarcodeTooShort { barcode: String, min: usize },

    /// A substance code was empty after normalization.
    #[error("Substance code must not be empty")]
    EmptySubstanceCode,

    /// A stored value could not be mapped to a known variant.
    #[error("Unknown {kind}: '{value}'")]
    UnknownVariant { kind: &'static str, value: String },
}
