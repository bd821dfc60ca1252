/// The closed set of record kinds the resolver can synthesize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Soa,
    A,
    Aaaa,
    Txt,
    Ns,
    Ptr,
    Unsupported,
}

impl RecordKind {
    pub fn from_mnemonic(mnemonic: &str) -> Self {
        match mnemonic {
            "SOA" => RecordKind::Soa,
            "A" => RecordKind::A,
            "AAAA" => RecordKind::Aaaa,
            "TXT" => RecordKind::Txt,
            "NS" => RecordKind::Ns,
            "PTR" => RecordKind::Ptr,
            _ => RecordKind::Unsupported,
        }
    }
}
