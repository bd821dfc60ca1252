use pdsql_domain::{DomainError, Zone};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::RecordStore;

/// Finds the nearest zone enclosing a name by dropping one leading label
/// at a time and asking the store for each remaining suffix.
pub struct ZoneWalker {
    store: Arc<dyn RecordStore>,
}

impl ZoneWalker {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// `name` must already be normalized. The name itself is never looked
    /// up, only its proper suffixes, longest first.
    #[instrument(skip(self))]
    pub async fn find_enclosing_zone(&self, name: &str) -> Result<Option<Zone>, DomainError> {
        let mut remainder = name;

        while let Some(parent) = strip_leading_label(remainder) {
            if let Some(zone) = self.store.find_domain_by_suffix(parent).await? {
                debug!(zone = %zone.name, zone_id = zone.id, "Found enclosing zone");
                return Ok(Some(zone));
            }
            remainder = parent;
        }

        debug!("No enclosing zone");
        Ok(None)
    }
}

/// `"a.example.org"` -> `"example.org"`. `None` once no label is left to drop.
fn strip_leading_label(name: &str) -> Option<&str> {
    match name.split_once('.') {
        Some((head, rest)) if !head.is_empty() && !rest.is_empty() => Some(rest),
        _ => None,
    }
}
