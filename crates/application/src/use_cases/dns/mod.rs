mod handler_chain;
mod resolve_query;

pub use handler_chain::HandlerChain;
pub use resolve_query::{ResolveQueryUseCase, HANDLER_NAME};
