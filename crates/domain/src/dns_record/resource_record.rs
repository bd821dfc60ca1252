use super::RecordType;
use crate::dns_query::DnsClass;
use crate::soa::SoaFields;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    Soa(SoaFields),
    A(Ipv4Addr),
    Aaaa(Ipv6Addr),
    Txt(Arc<str>),
    Ns(Arc<str>),
    /// Always terminated with a trailing dot.
    Ptr(Arc<str>),
}

impl RecordData {
    pub fn record_type(&self) -> RecordType {
        match self {
            RecordData::Soa(_) => RecordType::SOA,
            RecordData::A(_) => RecordType::A,
            RecordData::Aaaa(_) => RecordType::AAAA,
            RecordData::Txt(_) => RecordType::TXT,
            RecordData::Ns(_) => RecordType::NS,
            RecordData::Ptr(_) => RecordType::PTR,
        }
    }
}

/// A typed answer record. Built once per query and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    /// Fully qualified owner name.
    pub name: Arc<str>,
    pub class: DnsClass,
    pub ttl: u32,
    pub data: RecordData,
}

impl ResourceRecord {
    pub fn record_type(&self) -> RecordType {
        self.data.record_type()
    }
}
