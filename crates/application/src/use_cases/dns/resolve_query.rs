use async_trait::async_trait;
use pdsql_domain::dns_query::to_fqdn;
use pdsql_domain::{
    DnsQuery, DomainError, RecordType, ResourceRecord, ResourceRecordBuilder, StoredRecord,
    TypeFilter, WildcardMatcher,
};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::{Answer, DnsHandler, RecordStore, Resolution};
use crate::services::ZoneWalker;

pub const HANDLER_NAME: &str = "pdsql";

/// Answers queries from the record store: exact match first, then wildcard
/// records of the nearest enclosing zone, then an SOA for the additional
/// section when nothing else was found. Holds no per-query state.
pub struct ResolveQueryUseCase {
    store: Arc<dyn RecordStore>,
    zone_walker: ZoneWalker,
}

impl ResolveQueryUseCase {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            zone_walker: ZoneWalker::new(Arc::clone(&store)),
            store,
        }
    }

    #[instrument(skip(self, query), fields(name = %query.name, record_type = %query.record_type))]
    pub async fn execute(&self, query: &DnsQuery) -> Result<Resolution, DomainError> {
        let name = query.normalized_name();
        let filter = query.type_filter();

        let mut records = self.store.find_records(&name, filter.clone()).await?;
        if records.is_empty() {
            records = self.search_wildcard(query, &name, filter).await?;
        }

        let answers = build_answers(query, &records);
        let additional = if answers.is_empty() {
            self.soa_fallback(query, &name).await?
        } else {
            None
        };

        debug!(
            answers = answers.len(),
            soa = additional.is_some(),
            "Query resolved"
        );

        Ok(Answer {
            answers,
            additional,
        }
        .into())
    }

    async fn search_wildcard(
        &self,
        query: &DnsQuery,
        name: &str,
        filter: TypeFilter,
    ) -> Result<Vec<StoredRecord>, DomainError> {
        let zone = match self.zone_walker.find_enclosing_zone(name).await? {
            Some(zone) => zone,
            None => return Ok(Vec::new()),
        };

        let candidates = self.store.find_wildcard_records(zone.id, filter).await?;
        let qname = query.fqdn();

        let matched: Vec<StoredRecord> = candidates
            .into_iter()
            .filter(|record| WildcardMatcher::matches(&qname, &to_fqdn(&record.name)))
            .collect();

        debug!(zone = %zone.name, matched = matched.len(), "Wildcard search finished");
        Ok(matched)
    }

    async fn soa_fallback(
        &self,
        query: &DnsQuery,
        name: &str,
    ) -> Result<Option<ResourceRecord>, DomainError> {
        let records = self
            .store
            .find_records(name, TypeFilter::Only(RecordType::SOA))
            .await?;

        Ok(records
            .first()
            .and_then(|record| ResourceRecordBuilder::build(query, record).ok()))
    }
}

/// Builds every record that can be built; the rest are dropped.
fn build_answers(query: &DnsQuery, records: &[StoredRecord]) -> Vec<ResourceRecord> {
    records
        .iter()
        .filter_map(|record| match ResourceRecordBuilder::build(query, record) {
            Ok(rr) => Some(rr),
            Err(e) => {
                debug!(name = %record.name, error = %e, "Dropping record");
                None
            }
        })
        .collect()
}

#[async_trait]
impl DnsHandler for ResolveQueryUseCase {
    fn name(&self) -> &'static str {
        HANDLER_NAME
    }

    async fn handle_query(&self, query: &DnsQuery) -> Result<Resolution, DomainError> {
        self.execute(query).await
    }
}
