use ferrous_ptr_domain::DomainError;
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::RData;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct PtrResponse {
    pub id: u16,

    pub rcode: ResponseCode,

    pub truncated: bool,

    /// PTR targets in answer order, as presented on the wire.
    pub names: Vec<String>,
}

impl PtrResponse {
    pub fn is_nxdomain(&self) -> bool {
        self.rcode == ResponseCode::NXDomain
    }

    pub fn is_server_error(&self) -> bool {
        matches!(
            self.rcode,
            ResponseCode::ServFail | ResponseCode::Refused | ResponseCode::NotImp
        )
    }

    /// Maps the response code onto the lookup outcome.
    pub fn into_names(self) -> Result<Vec<String>, DomainError> {
        if self.is_nxdomain() {
            return Err(DomainError::NxDomain);
        }
        let status = ResponseParser::rcode_to_status(self.rcode);
        if self.is_server_error() {
            return Err(DomainError::InvalidDnsResponse(format!(
                "Upstream answered {}",
                status
            )));
        }
        if self.rcode != ResponseCode::NoError {
            return Err(DomainError::InvalidDnsResponse(format!(
                "Unexpected response code {}",
                status
            )));
        }
        Ok(self.names)
    }
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<PtrResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        let id = u16::from_be_bytes([response_bytes[0], response_bytes[1]]);
        let rcode = message.response_code();
        let truncated = message.truncated();

        let mut names = Vec::new();
        for record in message.answers() {
            if let RData::PTR(ptr) = record.data() {
                names.push(ptr.to_utf8());
            }
        }

        debug!(
            rcode = ?rcode,
            names = names.len(),
            truncated = truncated,
            "PTR response parsed"
        );

        Ok(PtrResponse {
            id,
            rcode,
            truncated,
            names,
        })
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}
