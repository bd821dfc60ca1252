pub mod dns;

pub use dns::{HandlerChain, ResolveQueryUseCase};
