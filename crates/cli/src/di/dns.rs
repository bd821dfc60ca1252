use super::Repositories;
use pdsql_application::ports::DnsHandler;
use pdsql_application::use_cases::{HandlerChain, ResolveQueryUseCase};
use std::sync::Arc;
use tracing::info;

pub struct DnsServices {
    pub chain: Arc<dyn DnsHandler>,
}

impl DnsServices {
    pub fn new(repos: &Repositories) -> Self {
        let resolver = Arc::new(ResolveQueryUseCase::new(repos.records.clone()));
        let chain = HandlerChain::new().with_handler(resolver);

        info!(handlers = chain.len(), "DNS handler chain ready");

        Self {
            chain: Arc::new(chain),
        }
    }
}
