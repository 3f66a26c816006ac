use async_trait::async_trait;
use ferrous_ptr_application::ports::PtrResolver;
use ferrous_ptr_domain::{parse_address, DomainError, ResolverEndpoint};
use std::net::IpAddr;
use tracing::debug;

/// Reverse lookups through the platform resolver (`getnameinfo`), which
/// honours `/etc/hosts` and the system resolver configuration.
///
/// `getnameinfo` reports a single name, so an address with several PTR
/// records yields one name here while a custom resolver returns all of them.
pub struct SystemPtrResolver {
    endpoint: ResolverEndpoint,
}

impl SystemPtrResolver {
    pub fn new() -> Self {
        Self {
            endpoint: ResolverEndpoint::System,
        }
    }
}

impl Default for SystemPtrResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PtrResolver for SystemPtrResolver {
    async fn lookup_addr(&self, address: &str) -> Result<Vec<String>, DomainError> {
        let ip = parse_address(address)?;

        debug!(ip = %ip, "Performing system PTR lookup");

        let hostname = tokio::task::spawn_blocking(move || dns_lookup::lookup_addr(&ip))
            .await
            .map_err(|e| DomainError::IoError(format!("System lookup task failed: {}", e)))?
            .map_err(|e| DomainError::IoError(format!("System lookup failed for {}: {}", ip, e)))?;

        // getnameinfo falls back to the numeric form when no name exists.
        if hostname.parse::<IpAddr>().is_ok() {
            return Err(DomainError::NxDomain);
        }

        Ok(vec![hostname])
    }

    fn endpoint(&self) -> &ResolverEndpoint {
        &self.endpoint
    }
}
