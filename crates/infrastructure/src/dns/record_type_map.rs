//! Mapping between the domain's record type / class enums and hickory's.

use hickory_proto::rr::{DNSClass, RecordType as HickoryRecordType};
use pdsql_domain::{DnsClass, RecordType};

/// Maps hickory query types onto domain record types
pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Types outside the domain catalogue keep their mnemonic, or the
    /// generic `TYPEnnn` form when hickory has no name for them.
    pub fn from_hickory(hickory_type: HickoryRecordType) -> RecordType {
        match hickory_type {
            HickoryRecordType::A => RecordType::A,
            HickoryRecordType::NS => RecordType::NS,
            HickoryRecordType::CNAME => RecordType::CNAME,
            HickoryRecordType::SOA => RecordType::SOA,
            HickoryRecordType::PTR => RecordType::PTR,
            HickoryRecordType::MX => RecordType::MX,
            HickoryRecordType::TXT => RecordType::TXT,
            HickoryRecordType::AAAA => RecordType::AAAA,
            HickoryRecordType::SRV => RecordType::SRV,
            HickoryRecordType::NAPTR => RecordType::NAPTR,
            HickoryRecordType::DS => RecordType::DS,
            HickoryRecordType::DNSKEY => RecordType::DNSKEY,
            HickoryRecordType::CAA => RecordType::CAA,
            HickoryRecordType::ANY => RecordType::ANY,
            HickoryRecordType::Unknown(code) => RecordType::other(&format!("TYPE{}", code)),
            other => RecordType::other(&other.to_string()),
        }
    }
}

pub struct DnsClassMapper;

impl DnsClassMapper {
    pub fn to_hickory(class: DnsClass) -> DNSClass {
        match class {
            DnsClass::IN => DNSClass::IN,
            DnsClass::CH => DNSClass::CH,
            DnsClass::HS => DNSClass::HS,
            DnsClass::NONE => DNSClass::NONE,
            DnsClass::ANY => DNSClass::ANY,
        }
    }

    pub fn from_hickory(class: DNSClass) -> Option<DnsClass> {
        match class {
            DNSClass::IN => Some(DnsClass::IN),
            DNSClass::CH => Some(DnsClass::CH),
            DNSClass::HS => Some(DnsClass::HS),
            DNSClass::NONE => Some(DnsClass::NONE),
            DNSClass::ANY => Some(DnsClass::ANY),
            _ => None,
        }
    }
}
