mod dns_handler;
mod record_store;

pub use dns_handler::{Answer, DnsHandler, Resolution};
pub use record_store::RecordStore;

// Re-export for convenience
pub use pdsql_domain::DnsQuery;
