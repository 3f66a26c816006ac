use super::PtrResolver;
use ferrous_ptr_domain::ResolverEndpoint;

/// Turns an endpoint description into a queryable resolver. Must not
/// perform network I/O.
pub trait ResolverFactory: Send + Sync {
    fn create(&self, endpoint: &ResolverEndpoint) -> Box<dyn PtrResolver>;
}
