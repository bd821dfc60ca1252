use async_trait::async_trait;
use pdsql_domain::{DomainError, StoredRecord, TypeFilter, Zone};

/// Read-only access to the zone/record tables.
///
/// Implementations must be safe for concurrent reads. An empty result is
/// not an error; `Err` is reserved for a store that could not run the query.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Enabled records whose name equals `name` case-insensitively.
    async fn find_records(
        &self,
        name: &str,
        filter: TypeFilter,
    ) -> Result<Vec<StoredRecord>, DomainError>;

    /// The zone named `name`, compared case-insensitively. When several rows
    /// match, the one with the lowest id wins.
    async fn find_domain_by_suffix(&self, name: &str) -> Result<Option<Zone>, DomainError>;

    /// Enabled records of a zone whose name contains a `*` label.
    async fn find_wildcard_records(
        &self,
        domain_id: i64,
        filter: TypeFilter,
    ) -> Result<Vec<StoredRecord>, DomainError>;
}
