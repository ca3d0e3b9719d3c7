//! Row parsing helpers shared by the repositories.

use chrono::{DateTime, Utc};
use lens_core::{Barcode, MAX_SEVERITY, SubstanceCode};

use crate::error::DatabaseError;

/// Product id for a product first ingested under `barcode`.
///
/// Deterministic, so two concurrent ingests of the same barcode converge on
/// one row.
#[must_use]
pub fn product_id_for(barcode: &Barcode) -> String {
    format!("prd-{barcode}")
}

/// Parse a TEXT timestamp in RFC 3339 or `SQLite`'s `datetime('now')` format.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string matches neither format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty string.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}

/// Read a nullable TEXT column, substituting `fallback` when absent.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_string_or(row: &libsql::Row, idx: i32, fallback: &str) -> Result<String, DatabaseError> {
    Ok(get_opt_string(row, idx)?.unwrap_or_else(|| fallback.to_string()))
}

/// Parse a stored substance code.
///
/// # Errors
///
/// Returns `DatabaseError::InvalidState` for a blank code.
pub fn parse_code(s: &str) -> Result<SubstanceCode, DatabaseError> {
    SubstanceCode::new(s).map_err(|e| DatabaseError::InvalidState(format!("substance code: {e}")))
}

/// Parse a TEXT column with a `FromStr` impl (status enums).
///
/// # Errors
///
/// Returns `DatabaseError::InvalidState` if the text is not a known variant.
pub fn parse_text<T>(s: &str) -> Result<T, DatabaseError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    s.parse::<T>()
        .map_err(|e| DatabaseError::InvalidState(e.to_string()))
}

/// Clamp a stored severity into `0..=MAX_SEVERITY`.
///
/// Out-of-range values are logged, never rejected.
#[must_use]
pub fn clamp_severity(code: &str, raw: i64) -> u8 {
    let clamped = raw.clamp(0, i64::from(MAX_SEVERITY));
    if clamped != raw {
        tracing::warn!(code, severity = raw, "severity out of range, clamped");
    }
    u8::try_from(clamped).unwrap_or(MAX_SEVERITY)
}

/// Encode a list of values as a JSON array for `json_each(?)` parameters.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if serialization fails.
pub fn json_list<S: AsRef<str>>(values: &[S]) -> Result<String, DatabaseError> {
    let values: Vec<&str> = values.iter().map(AsRef::as_ref).collect();
    serde_json::to_string(&values).map_err(|e| DatabaseError::Query(format!("json list: {e}")))
}
