use std::fmt;
use std::sync::Arc;

/// Record type mnemonics understood by the record store.
///
/// This is a catalogue of names, not a promise of synthesis: only the
/// types listed by [`super::RecordKind`] are turned into answers. Query
/// types outside the catalogue travel as [`RecordType::Other`] so the
/// store can still be asked for them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    NS,
    CNAME,
    SOA,
    PTR,
    MX,
    TXT,
    AAAA,
    SRV,
    NAPTR,
    DS,
    DNSKEY,
    CAA,

    /// Meta type: every type stored for a name.
    ANY,

    /// Any other type, by upper-case mnemonic (`HTTPS`, `TLSA`, `TYPE65534`).
    Other(Arc<str>),
}

impl RecordType {
    pub fn as_str(&self) -> &str {
        match self {
            RecordType::A => "A",
            RecordType::NS => "NS",
            RecordType::CNAME => "CNAME",
            RecordType::SOA => "SOA",
            RecordType::PTR => "PTR",
            RecordType::MX => "MX",
            RecordType::TXT => "TXT",
            RecordType::AAAA => "AAAA",
            RecordType::SRV => "SRV",
            RecordType::NAPTR => "NAPTR",
            RecordType::DS => "DS",
            RecordType::DNSKEY => "DNSKEY",
            RecordType::CAA => "CAA",
            RecordType::ANY => "ANY",
            RecordType::Other(mnemonic) => mnemonic.as_ref(),
        }
    }

    pub fn other(mnemonic: &str) -> Self {
        RecordType::Other(Arc::from(mnemonic.to_ascii_uppercase()))
    }

    pub fn is_any(&self) -> bool {
        matches!(self, RecordType::ANY)
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
