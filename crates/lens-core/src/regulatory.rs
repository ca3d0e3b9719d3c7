//! Regulatory status, knowledge-base records, findings, and summaries.
//!
//! All enums use `snake_case` serialization and expose `as_str()` for SQL
//! storage. `severity` is stored per record and is never derived from
//! `status`: the two may disagree and consumers must tolerate that.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::identity::SubstanceCode;

/// Highest severity a knowledge-base record can carry.
pub const MAX_SEVERITY: u8 = 5;

// ---------------------------------------------------------------------------
// RegulatoryStatus
// ---------------------------------------------------------------------------

/// Regulator's position on an additive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegulatoryStatus {
    /// Allowed under GMP or a specified limit.
    Permitted,
    /// Allowed only in certain food categories or with strict limits.
    Restricted,
    /// Prohibited.
    Banned,
    /// Absent from the regulator's approved list.
    NotListed,
}

impl RegulatoryStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Permitted => "permitted",
            Self::Restricted => "restricted",
            Self::Banned => "banned",
            Self::NotListed => "not_listed",
        }
    }
}

impl fmt::Display for RegulatoryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RegulatoryStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "permitted" => Ok(Self::Permitted),
            "restricted" => Ok(Self::Restricted),
            "banned" => Ok(Self::Banned),
            "not_listed" => Ok(Self::NotListed),
            other => Err(CoreError::UnknownVariant {
                kind: "regulatory status",
                value: other.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// ConcernLevel
// ---------------------------------------------------------------------------

/// Coarse, client-facing concern level for a whole product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConcernLevel {
    Safe,
    Low,
    Moderate,
    High,
}

impl ConcernLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }
}

impl fmt::Display for ConcernLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Records and findings
// ---------------------------------------------------------------------------

/// One knowledge-base entry, keyed by substance code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegulatoryRecord {
    pub code: SubstanceCode,
    pub name: String,
    pub status: RegulatoryStatus,
    /// Functional class (colour, preservative, emulsifier, ...).
    pub category: String,
    /// Exact limit ("100 ppm"), "GMP", or a ban marker.
    pub max_limit: String,
    pub health_concern: String,
    pub regulator_note: String,
    /// 0 = no concern, up to [`MAX_SEVERITY`].
    pub severity: u8,
}

/// A product's substance joined against the knowledge base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegulatoryFinding {
    pub code: SubstanceCode,
    pub name: String,
    pub status: RegulatoryStatus,
    pub category: String,
    pub max_limit: String,
    pub health_concern: String,
    pub regulator_note: String,
    pub severity: u8,
}

impl From<RegulatoryRecord> for RegulatoryFinding {
    fn from(record: RegulatoryRecord) -> Self {
        Self {
            code: record.code,
            name: record.name,
            status: record.status,
            category: record.category,
            max_limit: record.max_limit,
            health_concern: record.health_concern,
            regulator_note: record.regulator_note,
            severity: record.severity,
        }
    }
}

/// Derived, never persisted: tallies by status plus an overall verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegulatorySummary {
    pub overall_status: String,
    pub concern_level: ConcernLevel,
    pub banned_count: usize,
    pub restricted_count: usize,
    pub permitted_count: usize,
    pub unknown_count: usize,
    pub total_additives: usize,
}
