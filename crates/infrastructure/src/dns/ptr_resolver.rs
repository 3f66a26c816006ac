use super::forwarding::{MessageBuilder, PtrResponse, ResponseParser};
use super::transport::{create_transport, resolver::resolve_server};
use async_trait::async_trait;
use ferrous_ptr_application::ports::PtrResolver;
use ferrous_ptr_domain::{
    parse_address, ptr_name_for, DomainError, ResolverEndpoint, TransportProtocol,
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Reverse lookups against one custom resolver over UDP or TCP.
pub struct DnsPtrResolver {
    endpoint: ResolverEndpoint,
    host: Arc<str>,
    port: u16,
    protocol: TransportProtocol,
    timeout: Duration,
}

impl DnsPtrResolver {
    pub fn new(
        host: Arc<str>,
        port: u16,
        protocol: TransportProtocol,
        timeout: Duration,
    ) -> Self {
        Self {
            endpoint: ResolverEndpoint::Custom {
                host: Arc::clone(&host),
                port,
                protocol,
            },
            host,
            port,
            protocol,
            timeout,
        }
    }

    async fn exchange(
        &self,
        protocol: TransportProtocol,
        server: SocketAddr,
        query_id: u16,
        query: &[u8],
    ) -> Result<PtrResponse, DomainError> {
        let transport = create_transport(protocol, server);
        let response = transport.send(query, self.timeout).await?;
        let parsed = ResponseParser::parse(&response.bytes)?;

        if parsed.id != query_id {
            return Err(DomainError::InvalidDnsResponse(format!(
                "Response ID {} does not match query ID {} ({})",
                parsed.id, query_id, response.protocol_used
            )));
        }

        Ok(parsed)
    }
}

#[async_trait]
impl PtrResolver for DnsPtrResolver {
    async fn lookup_addr(&self, address: &str) -> Result<Vec<String>, DomainError> {
        let ip = parse_address(address)?;
        let reverse_name = ptr_name_for(&ip);
        let (query_id, query) = MessageBuilder::build_ptr_query(&reverse_name)?;
        let server = resolve_server(&self.host, self.port, self.timeout).await?;

        debug!(
            ip = %ip,
            reverse_name = %reverse_name,
            resolver = %self.endpoint,
            "Performing PTR lookup"
        );

        let mut response = self.exchange(self.protocol, server, query_id, &query).await?;

        if response.truncated && self.protocol == TransportProtocol::Udp {
            debug!(ip = %ip, resolver = %self.endpoint, "Truncated UDP response, retrying over TCP");
            response = self
                .exchange(TransportProtocol::Tcp, server, query_id, &query)
                .await?;
        }

        response.into_names()
    }

    fn endpoint(&self) -> &ResolverEndpoint {
        &self.endpoint
    }
}
