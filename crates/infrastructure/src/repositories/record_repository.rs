use async_trait::async_trait;
use pdsql_application::ports::RecordStore;
use pdsql_domain::{DomainError, StoredRecord, TypeFilter, Zone};
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::{error, instrument};

type RecordRow = (i64, String, String, String, i64, i64);

const RECORD_COLUMNS: &str = "COALESCE(domain_id, 0), COALESCE(name, ''), COALESCE(type, ''), \
     COALESCE(content, ''), COALESCE(ttl, 0), COALESCE(disabled, 0)";

/// [`RecordStore`] over the PowerDNS `domains` / `records` tables.
pub struct SqliteRecordRepository {
    pool: SqlitePool,
}

impl SqliteRecordRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_record(row: RecordRow) -> StoredRecord {
        let (domain_id, name, record_type, content, ttl, disabled) = row;
        StoredRecord {
            domain_id,
            name: Arc::from(name.as_str()),
            record_type: Arc::from(record_type.as_str()),
            content: Arc::from(content.as_str()),
            ttl: clamp_ttl(ttl),
            disabled: disabled != 0,
        }
    }
}

/// Negative TTLs become 0, oversized ones saturate.
fn clamp_ttl(ttl: i64) -> u32 {
    u32::try_from(ttl.max(0)).unwrap_or(u32::MAX)
}

#[async_trait]
impl RecordStore for SqliteRecordRepository {
    #[instrument(skip(self))]
    async fn find_records(
        &self,
        name: &str,
        filter: TypeFilter,
    ) -> Result<Vec<StoredRecord>, DomainError> {
        let type_name = filter.mnemonic();

        let rows = sqlx::query_as::<_, RecordRow>(&format!(
            "SELECT {RECORD_COLUMNS} FROM records
             WHERE name = ? COLLATE NOCASE
               AND COALESCE(disabled, 0) = 0
               AND (? IS NULL OR type = ?)
             ORDER BY id"
        ))
        .bind(name)
        .bind(type_name)
        .bind(type_name)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query records by name");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(Self::row_to_record).collect())
    }

    #[instrument(skip(self))]
    async fn find_domain_by_suffix(&self, name: &str) -> Result<Option<Zone>, DomainError> {
        let row = sqlx::query_as::<_, (i64, String)>(
            "SELECT id, name FROM domains
             WHERE name = ? COLLATE NOCASE
             ORDER BY id
             LIMIT 1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query domain by name");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|(id, name)| Zone::new(id, name)))
    }

    #[instrument(skip(self))]
    async fn find_wildcard_records(
        &self,
        domain_id: i64,
        filter: TypeFilter,
    ) -> Result<Vec<StoredRecord>, DomainError> {
        let type_name = filter.mnemonic();

        let rows = sqlx::query_as::<_, RecordRow>(&format!(
            "SELECT {RECORD_COLUMNS} FROM records
             WHERE domain_id = ?
               AND COALESCE(disabled, 0) = 0
               AND (? IS NULL OR type = ?)
               AND name LIKE '%*%'
             ORDER BY id"
        ))
        .bind(domain_id)
        .bind(type_name)
        .bind(type_name)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query wildcard records");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(Self::row_to_record).collect())
    }
}
