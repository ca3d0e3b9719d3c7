//! `regulatory_records`: the table behind the remote knowledge base.
//!
//! Missing text columns read back with neutral defaults and out-of-range
//! severities are clamped, so a hand-edited remote table never fails a
//! lookup outright. Status text must still be a known variant.

use lens_core::{RegulatoryRecord, RegulatoryStatus, SubstanceCode};

use crate::LensDb;
use crate::error::DatabaseError;
use crate::helpers::{clamp_severity, get_string_or, json_list, parse_code, parse_text};

const COLUMNS: &str =
    "code, name, status, category, max_limit, health_concern, regulator_note, severity";

fn row_to_record(row: &libsql::Row) -> Result<RegulatoryRecord, DatabaseError> {
    let code = row.get::<String>(0)?;
    let severity = row.get::<Option<i64>>(7)?.unwrap_or(0);
    Ok(RegulatoryRecord {
        code: parse_code(&code)?,
        name: get_string_or(row, 1, "Unknown")?,
        status: parse_text::<RegulatoryStatus>(&row.get::<String>(2)?)?,
        category: get_string_or(row, 3, "unknown")?,
        max_limit: get_string_or(row, 4, "unknown")?,
        health_concern: get_string_or(row, 5, "")?,
        regulator_note: get_string_or(row, 6, "")?,
        severity: clamp_severity(&code, severity),
    })
}

impl LensDb {
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or the row is invalid.
    pub async fn fetch_regulatory_record(
        &self,
        code: &SubstanceCode,
    ) -> Result<Option<RegulatoryRecord>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {COLUMNS} FROM regulatory_records WHERE code = ?1"),
                [code.as_str()],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_record(&row)?)),
            None => Ok(None),
        }
    }

    /// Fetch every record whose code is in `codes`, in one query.
    ///
    /// Codes without a row are simply absent from the result.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or a row is invalid.
    pub async fn fetch_regulatory_records(
        &self,
        codes: &[SubstanceCode],
    ) -> Result<Vec<RegulatoryRecord>, DatabaseError> {
        if codes.is_empty() {
            return Ok(Vec::new());
        }
        let keys: Vec<&str> = codes.iter().map(SubstanceCode::as_str).collect();
        let mut rows = self
            .conn()
            .query(
                &format!(
                    "SELECT {COLUMNS} FROM regulatory_records
                     WHERE code IN (SELECT value FROM json_each(?1))"
                ),
                [json_list(&keys)?],
            )
            .await?;
        let mut records = Vec::new();
        while let Some(row) = rows.next().await? {
            records.push(row_to_record(&row)?);
        }
        Ok(records)
    }

    /// # Errors
    ///
    /// Returns `DatabaseError` if the write fails.
    pub async fn upsert_regulatory_record(
        &self,
        record: &RegulatoryRecord,
    ) -> Result<(), DatabaseError> {
        self.conn()
            .execute(
                &format!(
                    "INSERT INTO regulatory_records ({COLUMNS})
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
                     ON CONFLICT(code) DO UPDATE SET
                       name = excluded.name,
                       status = excluded.status,
                       category = excluded.category,
                       max_limit = excluded.max_limit,
                       health_concern = excluded.health_concern,
                       regulator_note = excluded.regulator_note,
                       severity = excluded.severity"
                ),
                libsql::params![
                    record.code.as_str(),
                    record.name.as_str(),
                    record.status.as_str(),
                    record.category.as_str(),
                    record.max_limit.as_str(),
                    record.health_concern.as_str(),
                    record.regulator_note.as_str(),
                    i64::from(record.severity)
                ],
            )
            .await?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn count_regulatory_records(&self) -> Result<u64, DatabaseError> {
        let mut rows = self
            .conn()
            .query("SELECT COUNT(*) FROM regulatory_records", ())
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        u64::try_from(row.get::<i64>(0)?)
            .map_err(|e| DatabaseError::InvalidState(format!("record count: {e}")))
    }

    /// Most severe records first, ties broken by code.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or a row is invalid.
    pub async fn top_regulatory_records(
        &self,
        limit: u32,
    ) -> Result<Vec<RegulatoryRecord>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!(
                    "SELECT {COLUMNS} FROM regulatory_records
                     ORDER BY severity DESC, code LIMIT ?1"
                ),
                [i64::from(limit)],
            )
            .await?;
        let mut records = Vec::new();
        while let Some(row) = rows.next().await? {
            records.push(row_to_record(&row)?);
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn record(code: &str, status: RegulatoryStatus, severity: u8) -> RegulatoryRecord {
        RegulatoryRecord {
            code: SubstanceCode::new(code).unwrap(),
            name: format!("Substance {code}"),
            status,
            category: "preservative".into(),
            max_limit: "GMP".into(),
            health_concern: "none known".into(),
            regulator_note: "listed".into(),
            severity,
        }
    }

    #[tokio::test]
    async fn upsert_and_fetch_one() {
        let db = LensDb::open_in_memory().await.unwrap();
        let rec = record("E211", RegulatoryStatus::Restricted, 3);
        db.upsert_regulatory_record(&rec).await.unwrap();
        db.upsert_regulatory_record(&rec).await.unwrap();

        assert_eq!(db.fetch_regulatory_record(&rec.code).await.unwrap(), Some(rec));
        assert_eq!(db.count_regulatory_records().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn batch_fetch_skips_unknown_codes() {
        let db = LensDb::open_in_memory().await.unwrap();
        db.upsert_regulatory_record(&record("E924", RegulatoryStatus::Banned, 5))
            .await
            .unwrap();
        db.upsert_regulatory_record(&record("E322", RegulatoryStatus::Permitted, 1))
            .await
            .unwrap();

        let codes = vec![
            SubstanceCode::new("E924").unwrap(),
            SubstanceCode::new("E999").unwrap(),
        ];
        let found = db.fetch_regulatory_records(&codes).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].status, RegulatoryStatus::Banned);
        assert!(db.fetch_regulatory_records(&[]).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn top_records_order_by_severity() {
        let db = LensDb::open_in_memory().await.unwrap();
        for (code, severity) in [("E330", 0), ("E924", 5), ("E917", 4), ("E110", 3)] {
            db.upsert_regulatory_record(&record(code, RegulatoryStatus::Restricted, severity))
                .await
                .unwrap();
        }
        let top: Vec<String> = db
            .top_regulatory_records(2)
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.code.to_string())
            .collect();
        assert_eq!(top, vec!["E924", "E917"]);
    }

    #[tokio::test]
    async fn sparse_rows_read_with_defaults() {
        let db = LensDb::open_in_memory().await.unwrap();
        db.conn()
            .execute(
                "INSERT INTO regulatory_records (code, status, severity) VALUES ('E142', 'banned', 9)",
                (),
            )
            .await
            .unwrap();

        let rec = db
            .fetch_regulatory_record(&SubstanceCode::new("E142").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(rec.name, "Unknown");
        assert_eq!(rec.category, "unknown");
        assert_eq!(rec.max_limit, "unknown");
        assert_eq!(rec.regulator_note, "");
        assert_eq!(rec.severity, 5);
    }

    #[tokio::test]
    async fn unknown_status_text_is_invalid_state() {
        let db = LensDb::open_in_memory().await.unwrap();
        db.conn()
            .execute(
                "INSERT INTO regulatory_records (code, status) VALUES ('E100', 'approved')",
                (),
            )
            .await
            .unwrap();
        let err = db
            .fetch_regulatory_record(&SubstanceCode::new("E100").unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::InvalidState(_)));
    }
}
