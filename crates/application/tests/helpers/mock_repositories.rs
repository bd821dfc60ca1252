use async_trait::async_trait;
use pdsql_application::ports::{DnsHandler, RecordStore, Resolution};
use pdsql_domain::{DnsQuery, DomainError, StoredRecord, TypeFilter, Zone};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

/// In-memory record store with the same matching rules as the SQL one.
#[derive(Clone, Default)]
pub struct MockRecordStore {
    records: Arc<RwLock<Vec<StoredRecord>>>,
    zones: Arc<RwLock<Vec<Zone>>>,
    should_fail: Arc<AtomicBool>,
    fail_wildcard: Arc<AtomicBool>,
    suffix_lookups: Arc<RwLock<Vec<String>>>,
    record_lookups: Arc<AtomicUsize>,
}

impl MockRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_zone(&self, id: i64, name: &str) {
        self.zones.write().unwrap().push(Zone::new(id, name));
    }

    pub fn add_record(&self, record: StoredRecord) {
        self.records.write().unwrap().push(record);
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    pub fn set_fail_wildcard(&self, fail: bool) {
        self.fail_wildcard.store(fail, Ordering::SeqCst);
    }

    pub fn suffix_lookups(&self) -> Vec<String> {
        self.suffix_lookups.read().unwrap().clone()
    }

    pub fn record_lookups(&self) -> usize {
        self.record_lookups.load(Ordering::SeqCst)
    }

    fn check_failure(&self) -> Result<(), DomainError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::DatabaseError(
                "Mock store unavailable".to_string(),
            ));
        }
        Ok(())
    }
}

fn type_matches(record: &StoredRecord, filter: &TypeFilter) -> bool {
    match filter.mnemonic() {
        Some(mnemonic) => record.record_type.as_ref() == mnemonic,
        None => true,
    }
}

#[async_trait]
impl RecordStore for MockRecordStore {
    async fn find_records(
        &self,
        name: &str,
        filter: TypeFilter,
    ) -> Result<Vec<StoredRecord>, DomainError> {
        self.check_failure()?;
        self.record_lookups.fetch_add(1, Ordering::SeqCst);

        Ok(self
            .records
            .read()
            .unwrap()
            .iter()
            .filter(|r| !r.disabled)
            .filter(|r| r.name.eq_ignore_ascii_case(name))
            .filter(|r| type_matches(r, &filter))
            .cloned()
            .collect())
    }

    async fn find_domain_by_suffix(&self, name: &str) -> Result<Option<Zone>, DomainError> {
        self.check_failure()?;
        self.suffix_lookups.write().unwrap().push(name.to_string());

        let zones = self.zones.read().unwrap();
        Ok(zones
            .iter()
            .filter(|z| z.name.eq_ignore_ascii_case(name))
            .min_by_key(|z| z.id)
            .cloned())
    }

    async fn find_wildcard_records(
        &self,
        domain_id: i64,
        filter: TypeFilter,
    ) -> Result<Vec<StoredRecord>, DomainError> {
        self.check_failure()?;
        if self.fail_wildcard.load(Ordering::SeqCst) {
            return Err(DomainError::DatabaseError(
                "Mock wildcard query failed".to_string(),
            ));
        }

        Ok(self
            .records
            .read()
            .unwrap()
            .iter()
            .filter(|r| !r.disabled)
            .filter(|r| r.domain_id == domain_id)
            .filter(|r| r.name.contains('*'))
            .filter(|r| type_matches(r, &filter))
            .cloned()
            .collect())
    }
}

/// Handler returning a fixed outcome, counting how often it ran.
pub struct MockDnsHandler {
    name: &'static str,
    outcome: Result<Resolution, DomainError>,
    calls: AtomicUsize,
}

impl MockDnsHandler {
    pub fn new(name: &'static str, outcome: Result<Resolution, DomainError>) -> Self {
        Self {
            name,
            outcome,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DnsHandler for MockDnsHandler {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn handle_query(&self, _query: &DnsQuery) -> Result<Resolution, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}
