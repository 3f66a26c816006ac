mod ptr_resolver;
mod resolver_factory;
mod result_sink;

pub use ptr_resolver::PtrResolver;
pub use resolver_factory::ResolverFactory;
pub use result_sink::ResultSink;
