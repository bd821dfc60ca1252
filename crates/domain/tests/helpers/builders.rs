#![allow(dead_code)]
use pdsql_domain::{DnsClass, DnsQuery, RecordType, StoredRecord};
use std::sync::Arc;

pub struct StoredRecordBuilder {
    domain_id: i64,
    name: Arc<str>,
    record_type: Arc<str>,
    content: Arc<str>,
    ttl: u32,
    disabled: bool,
}

impl StoredRecordBuilder {
    pub fn new() -> Self {
        Self {
            domain_id: 1,
            name: "example.org".into(),
            record_type: "A".into(),
            content: "192.168.1.1".into(),
            ttl: 3600,
            disabled: false,
        }
    }

    pub fn domain_id(mut self, domain_id: i64) -> Self {
        self.domain_id = domain_id;
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.into();
        self
    }

    pub fn record_type(mut self, record_type: &str) -> Self {
        self.record_type = record_type.into();
        self
    }

    pub fn content(mut self, content: &str) -> Self {
        self.content = content.into();
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn build(self) -> StoredRecord {
        StoredRecord {
            domain_id: self.domain_id,
            name: self.name,
            record_type: self.record_type,
            content: self.content,
            ttl: self.ttl,
            disabled: self.disabled,
        }
    }
}

impl Default for StoredRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn query(name: &str, record_type: RecordType) -> DnsQuery {
    DnsQuery::new(name, record_type, DnsClass::IN)
}
