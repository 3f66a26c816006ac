pub mod forwarding;
pub mod ptr_resolver;
pub mod resolver_factory;
pub mod transport;

pub use ptr_resolver::DnsPtrResolver;
pub use resolver_factory::NetworkResolverFactory;
