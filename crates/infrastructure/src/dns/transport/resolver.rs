use ferrous_ptr_domain::DomainError;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

/// Turns a resolver host into a socket address. IP literals are used as-is;
/// anything else goes through the system resolver and the first address
/// wins.
pub async fn resolve_server(
    host: &str,
    port: u16,
    timeout: Duration,
) -> Result<SocketAddr, DomainError> {
    if let Ok(ip) = host.parse::<IpAddr>() {
        return Ok(SocketAddr::new(ip, port));
    }

    let target = format!("{}:{}", host, port);

    let mut addrs_iter = tokio::time::timeout(timeout, tokio::net::lookup_host(&target))
        .await
        .map_err(|_| DomainError::TransportTimeout {
            server: target.clone(),
        })?
        .map_err(|e| {
            DomainError::InvalidDomainName(format!("DNS resolution failed for {}: {}", target, e))
        })?;

    addrs_iter.next().ok_or_else(|| {
        DomainError::InvalidDomainName(format!("No addresses found for {}", target))
    })
}
