mod builder;
mod record_kind;
mod record_type;
mod resource_record;
mod stored_record;

pub use builder::{RecordBuildError, ResourceRecordBuilder};
pub use record_kind::RecordKind;
pub use record_type::RecordType;
pub use resource_record::{RecordData, ResourceRecord};
pub use stored_record::StoredRecord;
