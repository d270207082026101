//! Initiator address as reported by the session listing.

use super::ipv4::parse_ipv4;
use crate::error::SubnetError;
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// An initiator IPv4 address, optionally followed by `:port`.
///
/// The raw string is kept so output and errors show exactly what the cluster reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitiatorAddress {
    /// The string as received.
    pub raw: String,
    /// Address with any port stripped.
    pub addr: Ipv4Addr,
    /// Port, when the string carried one.
    pub port: Option<u16>,
}

impl InitiatorAddress {
    /// Value of the octet at `position`, `None` past the last octet.
    pub fn octet(&self, position: usize) -> Option<u8> {
        self.addr.octets().get(position).copied()
    }
}

impl FromStr for InitiatorAddress {
    type Err = SubnetError;

    /// Parse `"ip"` or `"ip:port"`.
    ///
    /// # Examples
    /// ```
    /// use iscsi_subnet_check::models::InitiatorAddress;
    /// let a: InitiatorAddress = "10.10.22.99:3260".parse().unwrap();
    /// assert_eq!(a.addr.to_string(), "10.10.22.99");
    /// assert_eq!(a.port, Some(3260));
    /// ```
    fn from_str(input: &str) -> Result<InitiatorAddress, SubnetError> {
        let trimmed = input.trim();
        let (host, port) = match trimmed.split_once(':') {
            Some((host, port)) => {
                let port = port.parse::<u16>().map_err(|_| {
                    SubnetError::invalid_address(input, format!("invalid port '{port}'"))
                })?;
                (host, Some(port))
            }
            None => (trimmed, None),
        };
        let addr = parse_ipv4(host).map_err(|e| match e {
            SubnetError::InvalidAddress { reason, .. } => SubnetError::invalid_address(input, reason),
            other => other,
        })?;
        Ok(InitiatorAddress {
            raw: input.to_string(),
            addr,
            port,
        })
    }
}

impl fmt::Display for InitiatorAddress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_with_port() {
        let a: InitiatorAddress = "10.10.22.99:3260".parse().unwrap();
        assert_eq!(a.addr, Ipv4Addr::new(10, 10, 22, 99));
        assert_eq!(a.port, Some(3260));
        assert_eq!(a.octet(2), Some(22));
        assert_eq!(a.to_string(), "10.10.22.99:3260");
    }

    #[test]
    fn test_address_without_port() {
        let a: InitiatorAddress = "10.10.20.7".parse().unwrap();
        assert_eq!(a.addr, Ipv4Addr::new(10, 10, 20, 7));
        assert_eq!(a.port, None);
        assert_eq!(a.octet(3), Some(7));
        assert_eq!(a.octet(4), None);
    }

    #[test]
    fn test_address_malformed_names_full_input() {
        let err = "10.10.x.5".parse::<InitiatorAddress>().unwrap_err();
        assert_eq!(err.input(), Some("10.10.x.5"));

        let err = "10.10.x.5:3260".parse::<InitiatorAddress>().unwrap_err();
        assert_eq!(err.input(), Some("10.10.x.5:3260"));
        assert!(matches!(err, SubnetError::InvalidAddress { .. }));
    }

    #[test]
    fn test_address_bad_port() {
        for input in ["10.10.22.99:", "10.10.22.99:iscsi", "10.10.22.99:70000", "10.10.22.99:1:2"] {
            assert!(
                matches!(
                    input.parse::<InitiatorAddress>(),
                    Err(SubnetError::InvalidAddress { .. })
                ),
                "expected InvalidAddress for '{input}'"
            );
        }
    }
}
