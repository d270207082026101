//! Cluster access.
//!
//! This module collects the inputs of the subnet check from a live cluster:
//! - [`api`] - JSON-RPC message types
//! - [`client`] - HTTPS client, login and MVIP retry
//! - [`credentials`] - username/password resolution, credential and MVIP prompts
//! - [`snapshot`] - saving and loading captured listings

mod api;
mod client;
mod credentials;
mod snapshot;

// Re-export public types and functions
pub use api::{IscsiSession, VirtualNetwork};
pub use client::{connect, endpoint, ClusterClient};
pub use credentials::{resolve_credentials, Credentials};
pub use snapshot::{
    default_snapshot_file, read_snapshot, write_snapshot, ClusterSnapshot, SubnetInputs,
};
