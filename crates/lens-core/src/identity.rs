//! Normalized identifiers.
//!
//! Both identifiers are normalized once, at construction: surrounding
//! whitespace is trimmed and ASCII letters are upper-cased. Every store,
//! catalog, and knowledge-base boundary takes the typed value, so the same
//! physical barcode or additive always maps to the same key.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Minimum accepted barcode length, in characters.
pub const MIN_BARCODE_LEN: usize = 5;

fn normalize(raw: &str) -> String {
    raw.trim().to_ascii_uppercase()
}

// ---------------------------------------------------------------------------
// Barcode
// ---------------------------------------------------------------------------

/// A product barcode (EAN-13, UPC, ...). Opaque beyond its minimum length.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Barcode(String);

impl Barcode {
    /// Normalize and validate a raw barcode.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::BarcodeTooShort`] if fewer than
    /// [`MIN_BARCODE_LEN`] characters remain after trimming.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let normalized = normalize(raw);
        if normalized.chars().count() < MIN_BARCODE_LEN {
            return Err(CoreError::BarcodeTooShort {
                barcode: normalized,
                min: MIN_BARCODE_LEN,
            });
        }
        Ok(Self(normalized))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Barcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Barcode {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Barcode> for String {
    fn from(value: Barcode) -> Self {
        value.0
    }
}

// ---------------------------------------------------------------------------
// SubstanceCode
// ---------------------------------------------------------------------------

/// A food additive code (E/INS number), e.g. `E322` or `E150D`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SubstanceCode(String);

impl SubstanceCode {
    /// Normalize a raw code.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptySubstanceCode`] if nothing remains after trimming.
    pub fn new(raw: &str) -> Result<Self, CoreError> {
        let normalized = normalize(raw);
        if normalized.is_empty() {
            return Err(CoreError::EmptySubstanceCode);
        }
        Ok(Self(normalized))
    }

    /// Whether this looks like an E-number: `E`, a digit, then letters/digits.
    #[must_use]
    pub fn is_e_number(&self) -> bool {
        let mut chars = self.0.chars();
        chars.next() == Some('E')
            && chars.next().is_some_and(|c| c.is_ascii_digit())
            && chars.all(|c| c.is_ascii_alphanumeric())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubstanceCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for SubstanceCode {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<SubstanceCode> for String {
    fn from(value: SubstanceCode) -> Self {
        value.0
    }
}
