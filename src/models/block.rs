//! Significant octet and block range types.

use std::fmt;

/// Largest value an octet can take.
pub const OCTET_MAX: u8 = 255;

/// Where a netmask stops being all ones, and how wide each local block is at that octet.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SignificantOctet {
    /// Zero-based octet index, 0-3.
    pub position: usize,
    /// Number of octet values per block, 1-255.
    pub block_size: u16,
    /// Set for an all-255 netmask, which falls back to single-address blocks.
    pub degenerate: bool,
}

/// Inclusive range of octet values forming one local block.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockRange {
    pub start: u8,
    pub end: u8,
}

impl BlockRange {
    pub fn new(start: u8, end: u8) -> BlockRange {
        assert!(start <= end, "block start[{start}] > end[{end}] should never happen.");
        BlockRange { start, end }
    }

    pub fn contains(&self, value: u8) -> bool {
        self.start <= value && value <= self.end
    }

    /// Number of octet values in the range.
    pub fn size(&self) -> u16 {
        u16::from(self.end) - u16::from(self.start) + 1
    }
}

impl fmt::Display for BlockRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
