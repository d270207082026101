//! Significant octet resolution.
//!
//! Finds the first netmask octet that is not 255 and the block size at that octet.

use crate::models::{Netmask, SignificantOctet, OCTETS, OCTET_MAX};

/// Resolve the significant octet position and block size of a netmask.
///
/// A zero mask octet resolves to block size 1 at any position, so the octet must match
/// exactly (`255.255.0.0` compares the third octet as a single value).
/// An all-255 mask falls back to the last octet with block size 1 and is flagged degenerate.
///
/// # Examples
/// ```
/// use iscsi_subnet_check::models::Netmask;
/// use iscsi_subnet_check::processing::resolve_significant_octet;
/// let octet = resolve_significant_octet(&Netmask::new([255, 255, 254, 0]));
/// assert_eq!((octet.position, octet.block_size), (2, 2));
/// ```
pub fn resolve_significant_octet(netmask: &Netmask) -> SignificantOctet {
    let found = netmask
        .octets()
        .iter()
        .enumerate()
        .find(|(_, &value)| value != OCTET_MAX)
        .map(|(position, &value)| (position, value));

    match found {
        Some((position, 0)) => {
            log::debug!("netmask {netmask}: octet {position} is 0, matching it exactly");
            SignificantOctet {
                position,
                block_size: 1,
                degenerate: false,
            }
        }
        Some((position, value)) => SignificantOctet {
            position,
            block_size: 256 - u16::from(value),
            degenerate: false,
        },
        None => {
            log::warn!(
                "netmask {netmask} has no octet below 255, every address is its own block"
            );
            SignificantOctet {
                position: OCTETS - 1,
                block_size: 1,
                degenerate: true,
            }
        }
    }
}
