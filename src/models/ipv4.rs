//! IPv4 parsing helpers and the [`Netmask`] type.
//!
//! Only dotted-quad notation is accepted. CIDR prefixes and IPv6 are rejected.

use crate::error::SubnetError;
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Number of octets in an IPv4 address.
pub const OCTETS: usize = 4;

/// Parse a dotted-quad IPv4 address, mapping failures to [`SubnetError::InvalidAddress`].
///
/// # Examples
/// ```
/// use iscsi_subnet_check::models::parse_ipv4;
/// assert_eq!(parse_ipv4(" 10.10.22.5 ").unwrap().octets(), [10, 10, 22, 5]);
/// assert!(parse_ipv4("10.10.x.5").is_err());
/// ```
pub fn parse_ipv4(input: &str) -> Result<Ipv4Addr, SubnetError> {
    let trimmed = input.trim();
    check_dotted_quad(trimmed).map_err(|reason| SubnetError::invalid_address(input, reason))?;
    Ipv4Addr::from_str(trimmed)
        .map_err(|_| SubnetError::invalid_address(input, "not a dotted-quad IPv4 address"))
}

/// Check octet count and that every octet is a number in 0..=255.
///
/// Gives a more useful reason than [`std::net::AddrParseError`] which only says "invalid".
fn check_dotted_quad(input: &str) -> Result<(), String> {
    if input.is_empty() {
        return Err("empty string".to_string());
    }
    let parts: Vec<&str> = input.split('.').collect();
    if parts.len() != OCTETS {
        return Err(format!("expected {OCTETS} octets, found {}", parts.len()));
    }
    for (i, part) in parts.iter().enumerate() {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(format!("octet {i} '{part}' is not a number"));
        }
        if part.parse::<u16>().map_or(true, |v| v > 255) {
            return Err(format!("octet {i} '{part}' is out of range 0-255"));
        }
    }
    Ok(())
}

/// A dotted-quad subnet mask such as `255.255.254.0`.
///
/// Contiguity is not enforced: the classifier only looks for the first octet that is not 255.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Netmask {
    octets: [u8; OCTETS],
}

impl Netmask {
    pub fn new(octets: [u8; OCTETS]) -> Netmask {
        Netmask { octets }
    }

    pub fn octets(&self) -> [u8; OCTETS] {
        self.octets
    }

    /// True when the mask is a run of 1 bits followed by a run of 0 bits.
    pub fn is_contiguous(&self) -> bool {
        let bits = u32::from_be_bytes(self.octets);
        bits.leading_ones() + bits.trailing_zeros() == 32
    }
}

impl FromStr for Netmask {
    type Err = SubnetError;

    fn from_str(input: &str) -> Result<Netmask, SubnetError> {
        let trimmed = input.trim();
        check_dotted_quad(trimmed).map_err(|reason| SubnetError::invalid_netmask(input, reason))?;
        let addr = Ipv4Addr::from_str(trimmed)
            .map_err(|_| SubnetError::invalid_netmask(input, "not a dotted-quad netmask"))?;
        let netmask = Netmask::new(addr.octets());
        if !netmask.is_contiguous() {
            log::warn!("netmask {netmask} is not contiguous, results may be misleading");
        }
        Ok(netmask)
    }
}

impl fmt::Display for Netmask {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", Ipv4Addr::from(self.octets))
    }
}
