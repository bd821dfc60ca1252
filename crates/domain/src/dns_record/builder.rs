use super::{RecordData, RecordKind, ResourceRecord, StoredRecord};
use crate::dns_query::{to_fqdn, DnsQuery};
use crate::soa::{SoaFields, SoaParseError};
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::Arc;
use thiserror::Error;

/// Why a stored row could not become an answer. Never fatal to a response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordBuildError {
    #[error("Unsupported record type: {0}")]
    UnsupportedRecordType(String),

    #[error("Malformed {record_type} content: {content:?}")]
    MalformedContent { record_type: String, content: String },

    #[error(transparent)]
    Soa(#[from] SoaParseError),
}

pub struct ResourceRecordBuilder;

impl ResourceRecordBuilder {
    /// Turns a stored row into a typed record owned by the query name.
    pub fn build(query: &DnsQuery, record: &StoredRecord) -> Result<ResourceRecord, RecordBuildError> {
        let data = Self::build_data(record)?;

        Ok(ResourceRecord {
            name: Arc::from(query.fqdn()),
            class: query.class,
            ttl: record.ttl,
            data,
        })
    }

    fn build_data(record: &StoredRecord) -> Result<RecordData, RecordBuildError> {
        let content = record.content.as_ref();

        match RecordKind::from_mnemonic(&record.record_type) {
            RecordKind::Soa => Ok(RecordData::Soa(SoaFields::parse(content)?)),
            RecordKind::A => content
                .parse::<Ipv4Addr>()
                .map(RecordData::A)
                .map_err(|_| malformed(record)),
            RecordKind::Aaaa => content
                .parse::<Ipv6Addr>()
                .map(RecordData::Aaaa)
                .map_err(|_| malformed(record)),
            RecordKind::Txt => Ok(RecordData::Txt(Arc::clone(&record.content))),
            RecordKind::Ns => Ok(RecordData::Ns(Arc::clone(&record.content))),
            RecordKind::Ptr => Ok(RecordData::Ptr(Arc::from(to_fqdn(content)))),
            RecordKind::Unsupported => Err(RecordBuildError::UnsupportedRecordType(
                record.record_type.to_string(),
            )),
        }
    }
}

fn malformed(record: &StoredRecord) -> RecordBuildError {
    RecordBuildError::MalformedContent {
        record_type: record.record_type.to_string(),
        content: record.content.to_string(),
    }
}
