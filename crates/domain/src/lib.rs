//! Ferrous PTR Domain Layer
pub mod config;
pub mod dns_protocol;
pub mod errors;
pub mod output;
pub mod reverse_name;

pub use config::LookupConfig;
pub use dns_protocol::{ResolverEndpoint, TransportProtocol};
pub use errors::DomainError;
pub use output::OutputMode;
pub use reverse_name::{parse_address, ptr_name_for, trim_root_label};
