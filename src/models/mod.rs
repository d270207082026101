//! Domain models for the iSCSI subnet check.
//!
//! - [`Netmask`] and IPv4 parsing helpers
//! - [`InitiatorAddress`] - an `ip[:port]` reported for one iSCSI session
//! - [`SignificantOctet`] and [`BlockRange`] - the local block derived from the netmask
//! - [`Classification`] and [`SubnetReport`] - per-address verdicts

mod address;
mod block;
mod classification;
mod ipv4;

// Re-export public types
pub use address::InitiatorAddress;
pub use block::{BlockRange, SignificantOctet, OCTET_MAX};
pub use classification::{
    Classification, InvalidAddressPolicy, SubnetReport, Verdict,
};
pub use ipv4::{parse_ipv4, Netmask, OCTETS};
