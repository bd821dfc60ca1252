use async_trait::async_trait;
use pdsql_domain::{DnsQuery, DomainError};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::ports::{DnsHandler, Resolution};

/// Ordered list of handlers. The first one that answers wins; a handler
/// that falls through hands the query to the next. A hard error stops the
/// walk.
pub struct HandlerChain {
    handlers: Vec<Arc<dyn DnsHandler>>,
}

impl HandlerChain {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    pub fn with_handler(mut self, handler: Arc<dyn DnsHandler>) -> Self {
        self.handlers.push(handler);
        self
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub async fn execute(&self, query: &DnsQuery) -> Result<Resolution, DomainError> {
        let mut first_additional = None;

        for handler in &self.handlers {
            match handler.handle_query(query).await {
                Ok(Resolution::Answered(answer)) => {
                    debug!(handler = handler.name(), "Handler answered");
                    return Ok(Resolution::Answered(answer));
                }
                Ok(Resolution::Fallthrough { additional }) => {
                    debug!(handler = handler.name(), "Handler fell through");
                    if first_additional.is_none() {
                        first_additional = additional;
                    }
                }
                Err(e) => {
                    warn!(handler = handler.name(), error = %e, "Handler failed");
                    return Err(e);
                }
            }
        }

        Ok(Resolution::Fallthrough {
            additional: first_additional,
        })
    }
}

impl Default for HandlerChain {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DnsHandler for HandlerChain {
    fn name(&self) -> &'static str {
        "chain"
    }

    async fn handle_query(&self, query: &DnsQuery) -> Result<Resolution, DomainError> {
        self.execute(query).await
    }
}
