//! Per-address classification results.

use super::{BlockRange, InitiatorAddress, SignificantOctet};
use crate::error::SubnetError;
use std::fmt;

/// Whether an initiator sits in the SVIP's local block.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Local: same block as the SVIP.
    Pass,
    /// Routed: a different block.
    Fail,
}

impl Verdict {
    pub fn is_pass(&self) -> bool {
        *self == Verdict::Pass
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Verdict::Pass => write!(f, "Pass"),
            Verdict::Fail => write!(f, "Fail"),
        }
    }
}

/// One initiator and its verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub address: InitiatorAddress,
    /// The address's value at the significant octet.
    pub octet_value: u8,
    pub verdict: Verdict,
}

/// What to do with an initiator address that cannot be parsed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum InvalidAddressPolicy {
    /// Stop at the first malformed address and return its error.
    #[default]
    Abort,
    /// Log and collect malformed addresses, classify the rest.
    Skip,
}

/// Outcome of one classification run.
#[derive(Debug, Clone)]
pub struct SubnetReport {
    pub netmask: String,
    pub svip: String,
    pub significant_octet: SignificantOctet,
    /// The block containing the SVIP.
    pub reference: BlockRange,
    /// In input order.
    pub results: Vec<Classification>,
    /// Malformed addresses, only filled under [`InvalidAddressPolicy::Skip`].
    pub rejected: Vec<SubnetError>,
}

impl SubnetReport {
    pub fn local_count(&self) -> usize {
        self.results.iter().filter(|c| c.verdict.is_pass()).count()
    }

    pub fn routed_count(&self) -> usize {
        self.results.len() - self.local_count()
    }
}
