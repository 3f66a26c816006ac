use super::DnsPtrResolver;
use crate::system::SystemPtrResolver;
use ferrous_ptr_application::ports::{PtrResolver, ResolverFactory};
use ferrous_ptr_domain::ResolverEndpoint;
use std::sync::Arc;
use std::time::Duration;

/// Builds resolvers that talk to the network: the platform resolver for
/// [`ResolverEndpoint::System`], a wire-level client otherwise.
pub struct NetworkResolverFactory {
    query_timeout: Duration,
}

impl NetworkResolverFactory {
    pub fn new(query_timeout: Duration) -> Self {
        Self { query_timeout }
    }
}

impl ResolverFactory for NetworkResolverFactory {
    fn create(&self, endpoint: &ResolverEndpoint) -> Box<dyn PtrResolver> {
        match endpoint {
            ResolverEndpoint::System => Box::new(SystemPtrResolver::new()),
            ResolverEndpoint::Custom {
                host,
                port,
                protocol,
            } => Box::new(DnsPtrResolver::new(
                Arc::clone(host),
                *port,
                *protocol,
                self.query_timeout,
            )),
        }
    }
}
