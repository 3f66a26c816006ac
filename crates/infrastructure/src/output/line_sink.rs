use ferrous_ptr_application::ports::ResultSink;
use ferrous_ptr_domain::DomainError;
use std::io::{self, Write};
use std::sync::Mutex;

/// Writes result lines to any `Write`. The lock is held for the whole line
/// so concurrent workers never tear each other's output.
pub struct LineSink<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> LineSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl LineSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> ResultSink for LineSink<W> {
    fn emit(&self, line: &str) -> Result<(), DomainError> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| DomainError::IoError("Output writer lock poisoned".to_string()))?;

        let mut buf = Vec::with_capacity(line.len() + 1);
        buf.extend_from_slice(line.as_bytes());
        buf.push(b'\n');

        writer
            .write_all(&buf)
            .and_then(|_| writer.flush())
            .map_err(|e| DomainError::IoError(format!("Failed to write result: {}", e)))
    }
}
