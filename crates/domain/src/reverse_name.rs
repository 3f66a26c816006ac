use crate::DomainError;
use std::net::IpAddr;

/// Builds the fully-qualified PTR query name for an address.
///
/// `8.8.4.4` becomes `4.4.8.8.in-addr.arpa.`; IPv6 addresses are expanded
/// into reversed nibbles under `ip6.arpa.`.
pub fn ptr_name_for(ip: &IpAddr) -> String {
    match ip {
        IpAddr::V4(ipv4) => {
            let octets = ipv4.octets();
            format!(
                "{}.{}.{}.{}.in-addr.arpa.",
                octets[3], octets[2], octets[1], octets[0]
            )
        }
        IpAddr::V6(ipv6) => {
            let mut name = String::with_capacity(73);
            for byte in ipv6.octets().iter().rev() {
                name.push_str(&format!("{:x}.{:x}.", byte & 0x0f, (byte >> 4) & 0x0f));
            }
            name.push_str("ip6.arpa.");
            name
        }
    }
}

pub fn parse_address(address: &str) -> Result<IpAddr, DomainError> {
    address
        .trim()
        .parse()
        .map_err(|_| DomainError::InvalidIpAddress(address.to_string()))
}

/// Strips every trailing root label dot from a resolved name.
pub fn trim_root_label(name: &str) -> &str {
    name.trim_end_matches('.')
}
