//! Subnet classification logic.
//!
//! Three stages, each returning the input of the next:
//! - [`resolver`] - significant octet and block size from the netmask
//! - [`blocks`] - block ranges over the octet and the block holding the SVIP
//! - [`classifier`] - Pass/Fail per initiator address

mod blocks;
mod classifier;
mod resolver;

// Re-export public functions
pub use blocks::{block_range_for, build_block_ranges};
pub use classifier::{check_subnet, classify_addresses};
pub use resolver::resolve_significant_octet;
