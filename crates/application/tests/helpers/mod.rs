#![allow(dead_code)]
#![allow(unused_imports)]

mod mock_repositories;

pub use mock_repositories::*;

use pdsql_domain::{DnsClass, DnsQuery, RecordType, StoredRecord};

pub fn record(domain_id: i64, name: &str, record_type: &str, content: &str, ttl: u32) -> StoredRecord {
    StoredRecord::new(domain_id, name, record_type, content, ttl)
}

pub fn query(name: &str, record_type: RecordType) -> DnsQuery {
    DnsQuery::new(name, record_type, DnsClass::IN)
}
