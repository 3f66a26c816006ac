use crate::DomainError;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Transport used to reach a custom resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TransportProtocol {
    Tcp,
    #[default]
    Udp,
}

impl TransportProtocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tcp => "tcp",
            Self::Udp => "udp",
        }
    }
}

impl fmt::Display for TransportProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransportProtocol {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tcp" => Ok(Self::Tcp),
            "udp" => Ok(Self::Udp),
            other => Err(DomainError::UnknownProtocol(other.to_string())),
        }
    }
}

/// One queryable resolver.
///
/// A `Custom` endpoint only captures dial parameters; nothing is opened
/// until a lookup is issued against it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResolverEndpoint {
    /// Platform resolver; port and transport overrides do not apply.
    System,
    Custom {
        host: Arc<str>,
        port: u16,
        protocol: TransportProtocol,
    },
}

impl ResolverEndpoint {
    pub fn custom(host: &str, port: u16, protocol: TransportProtocol) -> Self {
        Self::Custom {
            host: Arc::from(host),
            port,
            protocol,
        }
    }

    pub fn is_system(&self) -> bool {
        matches!(self, Self::System)
    }

    pub fn protocol(&self) -> Option<TransportProtocol> {
        match self {
            Self::System => None,
            Self::Custom { protocol, .. } => Some(*protocol),
        }
    }

    /// `host:port` as handed to the dialer. IPv6 literals are bracketed.
    pub fn dial_target(&self) -> Option<String> {
        match self {
            Self::System => None,
            Self::Custom { host, port, .. } if host.contains(':') => {
                Some(format!("[{}]:{}", host, port))
            }
            Self::Custom { host, port, .. } => Some(format!("{}:{}", host, port)),
        }
    }
}

impl fmt::Display for ResolverEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::System => f.write_str("system"),
            Self::Custom { protocol, .. } => match self.dial_target() {
                Some(target) => write!(f, "{}/{}", target, protocol),
                None => f.write_str("system"),
            },
        }
    }
}
