//! pdsql Domain Layer
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod errors;
pub mod soa;
pub mod wildcard;
pub mod zone;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_query::{DnsClass, DnsQuery, TypeFilter};
pub use dns_record::{
    RecordBuildError, RecordData, RecordKind, RecordType, ResourceRecord, ResourceRecordBuilder,
    StoredRecord,
};
pub use errors::DomainError;
pub use soa::{SoaFields, SoaParseError};
pub use wildcard::WildcardMatcher;
pub use zone::Zone;
