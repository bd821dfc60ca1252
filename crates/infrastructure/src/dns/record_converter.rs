use hickory_proto::rr::rdata::{A, AAAA, NS, PTR, SOA, TXT};
use hickory_proto::rr::{Name, RData, Record};
use pdsql_domain::{RecordData, ResourceRecord, SoaFields};
use std::str::FromStr;
use tracing::warn;

use super::record_type_map::DnsClassMapper;

/// Converts typed answer records into hickory wire records.
pub struct RecordConverter;

impl RecordConverter {
    /// Returns `None` when a name inside the record cannot be parsed.
    pub fn to_hickory(record: &ResourceRecord) -> Option<Record> {
        let name = parse_name(&record.name)?;
        let rdata = Self::to_rdata(&record.data)?;

        let mut converted = Record::from_rdata(name, record.ttl, rdata);
        converted.set_dns_class(DnsClassMapper::to_hickory(record.class));
        Some(converted)
    }

    /// Converts every record, skipping the ones that fail.
    pub fn to_hickory_all(records: &[ResourceRecord]) -> Vec<Record> {
        records.iter().filter_map(Self::to_hickory).collect()
    }

    fn to_rdata(data: &RecordData) -> Option<RData> {
        match data {
            RecordData::A(ip) => Some(RData::A(A::from(*ip))),
            RecordData::Aaaa(ip) => Some(RData::AAAA(AAAA::from(*ip))),
            RecordData::Txt(text) => Some(RData::TXT(TXT::new(vec![text.to_string()]))),
            RecordData::Ns(target) => Some(RData::NS(NS(parse_name(target)?))),
            RecordData::Ptr(target) => Some(RData::PTR(PTR(parse_name(target)?))),
            RecordData::Soa(soa) => Some(RData::SOA(Self::to_soa(soa)?)),
        }
    }

    fn to_soa(soa: &SoaFields) -> Option<SOA> {
        Some(SOA::new(
            parse_name(&soa.mname)?,
            parse_name(&soa.rname)?,
            soa.serial,
            saturating_i32(soa.refresh),
            saturating_i32(soa.retry),
            saturating_i32(soa.expire),
            soa.minimum,
        ))
    }
}

fn parse_name(name: &str) -> Option<Name> {
    match Name::from_str(name) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            warn!(name = %name, error = %e, "Dropping record with unparseable name");
            None
        }
    }
}

// hickory stores refresh/retry/expire as i32
fn saturating_i32(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
