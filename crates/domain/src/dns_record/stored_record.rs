use std::sync::Arc;

/// A row from the `records` table, read-only to the resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredRecord {
    pub domain_id: i64,

    /// Owner name without the trailing dot. May contain a `*` label.
    pub name: Arc<str>,

    /// Upper-case type mnemonic exactly as stored.
    pub record_type: Arc<str>,

    pub content: Arc<str>,

    pub ttl: u32,

    pub disabled: bool,
}

impl StoredRecord {
    pub fn new(
        domain_id: i64,
        name: impl Into<Arc<str>>,
        record_type: impl Into<Arc<str>>,
        content: impl Into<Arc<str>>,
        ttl: u32,
    ) -> Self {
        Self {
            domain_id,
            name: name.into(),
            record_type: record_type.into(),
            content: content.into(),
            ttl,
            disabled: false,
        }
    }
}
