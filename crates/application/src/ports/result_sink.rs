use ferrous_ptr_domain::DomainError;

/// Destination for formatted result lines. Each call writes one whole line.
pub trait ResultSink: Send + Sync {
    fn emit(&self, line: &str) -> Result<(), DomainError>;
}
