//! Block range construction.
//!
//! Splits the octet value space 0-255 into consecutive blocks of `block_size` values.
//! When `block_size` does not divide 256 the last block is clamped to end at 255.

use crate::models::{BlockRange, OCTET_MAX};

/// Build all blocks covering 0..=255 for the given block size.
///
/// # Panics
/// * If `block_size` is 0 or larger than 256
pub fn build_block_ranges(block_size: u16) -> Vec<BlockRange> {
    assert!(
        (1..=256).contains(&block_size),
        "block_size[{block_size}] outside 1-256 should never happen."
    );
    let mut ranges = Vec::with_capacity(usize::from(256 / block_size + 1));
    let mut start: u16 = 0;
    while start <= u16::from(OCTET_MAX) {
        let end = (start + block_size - 1).min(u16::from(OCTET_MAX));
        ranges.push(BlockRange::new(start as u8, end as u8));
        start += block_size;
    }
    ranges
}

/// Find the block containing `value`.
///
/// # Examples
/// ```
/// use iscsi_subnet_check::models::BlockRange;
/// use iscsi_subnet_check::processing::block_range_for;
/// assert_eq!(block_range_for(2, 22), BlockRange::new(22, 23));
/// assert_eq!(block_range_for(16, 37), BlockRange::new(32, 47));
/// ```
pub fn block_range_for(block_size: u16, value: u8) -> BlockRange {
    let block = build_block_ranges(block_size)
        .into_iter()
        .find(|block| block.contains(value));
    // build_block_ranges covers every u8
    block.unwrap_or_else(|| panic!("no block of size {block_size} contains {value}"))
}
