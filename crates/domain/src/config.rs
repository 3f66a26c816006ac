use crate::{DomainError, OutputMode, TransportProtocol};
use std::time::Duration;

/// Run configuration, built once at startup and shared read-only by every
/// worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupConfig {
    pub threads: usize,

    /// Single resolver address (`-r`).
    pub resolver: Option<String>,

    /// Comma-delimited resolver addresses (`-l`).
    pub resolvers: Option<String>,

    pub protocol: TransportProtocol,

    pub port: u16,

    pub domain_only: bool,

    /// Upper bound for one exchange with a custom resolver.
    pub query_timeout: Duration,
}

fn default_threads() -> usize {
    8
}

fn default_port() -> u16 {
    53
}

fn default_query_timeout() -> Duration {
    Duration::from_secs(5)
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            threads: default_threads(),
            resolver: None,
            resolvers: None,
            protocol: TransportProtocol::default(),
            port: default_port(),
            domain_only: false,
            query_timeout: default_query_timeout(),
        }
    }
}

impl LookupConfig {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.threads == 0 {
            return Err(DomainError::ConfigError(
                "thread count must be at least 1".to_string(),
            ));
        }
        if self.query_timeout.is_zero() {
            return Err(DomainError::ConfigError(
                "query timeout cannot be 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Empty strings count as "not set", matching how the flags are read.
    pub fn single_resolver(&self) -> Option<&str> {
        self.resolver.as_deref().filter(|s| !s.is_empty())
    }

    pub fn resolver_list(&self) -> Option<&str> {
        self.resolvers.as_deref().filter(|s| !s.is_empty())
    }

    pub fn output_mode(&self) -> OutputMode {
        OutputMode::from_domain_only(self.domain_only)
    }
}
