use async_trait::async_trait;
use ferrous_ptr_domain::{DomainError, ResolverEndpoint};

#[async_trait]
pub trait PtrResolver: Send + Sync {
    /// Reverse-resolves `address`, returning every name the resolver
    /// reported. Names may still carry the trailing root dot.
    async fn lookup_addr(&self, address: &str) -> Result<Vec<String>, DomainError>;

    fn endpoint(&self) -> &ResolverEndpoint;
}
