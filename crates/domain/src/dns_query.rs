use super::RecordType;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DnsClass {
    IN,
    CH,
    HS,
    NONE,
    ANY,
}

impl DnsClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            DnsClass::IN => "IN",
            DnsClass::CH => "CH",
            DnsClass::HS => "HS",
            DnsClass::NONE => "NONE",
            DnsClass::ANY => "ANY",
        }
    }
}

impl fmt::Display for DnsClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Type restriction handed to the record store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeFilter {
    Any,
    Only(RecordType),
}

impl TypeFilter {
    /// Mnemonic to bind in a store query, `None` when every type is wanted.
    pub fn mnemonic(&self) -> Option<&str> {
        match self {
            TypeFilter::Any => None,
            TypeFilter::Only(record_type) => Some(record_type.as_str()),
        }
    }
}

impl From<RecordType> for TypeFilter {
    fn from(record_type: RecordType) -> Self {
        if record_type.is_any() {
            TypeFilter::Any
        } else {
            TypeFilter::Only(record_type)
        }
    }
}

/// One incoming question. `name` is kept exactly as received.
#[derive(Debug, Clone)]
pub struct DnsQuery {
    pub name: Arc<str>,
    pub record_type: RecordType,
    pub class: DnsClass,
}

impl DnsQuery {
    pub fn new(name: impl Into<Arc<str>>, record_type: RecordType, class: DnsClass) -> Self {
        Self {
            name: name.into(),
            record_type,
            class,
        }
    }

    /// Lower-cased name without the trailing dot; the root stays `"."`.
    pub fn normalized_name(&self) -> String {
        normalize_name(&self.name)
    }

    /// Normalized name with the trailing dot restored.
    pub fn fqdn(&self) -> String {
        to_fqdn(&self.normalized_name())
    }

    pub fn type_filter(&self) -> TypeFilter {
        TypeFilter::from(self.record_type.clone())
    }
}

pub fn normalize_name(name: &str) -> String {
    let lower = name.to_ascii_lowercase();
    if lower == "." {
        return lower;
    }
    match lower.strip_suffix('.') {
        Some(stripped) => stripped.to_string(),
        None => lower,
    }
}

pub fn to_fqdn(name: &str) -> String {
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{}.", name)
    }
}
