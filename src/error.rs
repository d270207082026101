//! Error types.
//!
//! [`SubnetError`] covers malformed input to the subnet classifier.
//! [`ClusterError`] covers everything that can go wrong while talking to the cluster,
//! prompting for credentials or reading a snapshot.

use thiserror::Error;

/// Malformed netmask or address handed to the classifier.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubnetError {
    #[error("invalid netmask '{input}': {reason}")]
    InvalidNetmask { input: String, reason: String },

    #[error("invalid address '{input}': {reason}")]
    InvalidAddress { input: String, reason: String },

    #[error("octet position {position} is out of range 0-3")]
    InvalidOctetPosition { position: usize },
}

impl SubnetError {
    pub fn invalid_netmask(input: &str, reason: impl Into<String>) -> Self {
        SubnetError::InvalidNetmask {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub fn invalid_address(input: &str, reason: impl Into<String>) -> Self {
        SubnetError::InvalidAddress {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    /// The offending input string, if the error came from parsing one.
    pub fn input(&self) -> Option<&str> {
        match self {
            SubnetError::InvalidNetmask { input, .. } => Some(input),
            SubnetError::InvalidAddress { input, .. } => Some(input),
            SubnetError::InvalidOctetPosition { .. } => None,
        }
    }
}

/// Failure while collecting data from the cluster.
#[derive(Error, Debug)]
pub enum ClusterError {
    #[error("cluster rejected the credentials for user '{username}'")]
    Unauthorized { username: String },

    #[error("http request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{method} returned http status {status}")]
    Status { method: String, status: u16 },

    #[error("{method} failed: {name}: {message}")]
    Api {
        method: String,
        name: String,
        message: String,
    },

    #[error("error parsing {context}: path={path} error={message}")]
    Parse {
        context: String,
        path: String,
        message: String,
    },

    #[error("cluster {mvip} has no virtual networks")]
    NoVirtualNetworks { mvip: String },

    #[error("missing setting '{0}' and prompting is disabled")]
    MissingSetting(&'static str),

    #[error("prompt failed: {0}")]
    Prompt(String),

    #[error("snapshot {path}: {message}")]
    Snapshot { path: String, message: String },
}

impl ClusterError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClusterError::Unauthorized { .. })
    }

    /// The MVIP could not be reached or did not answer in time.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, ClusterError::Http { source, .. } if source.is_connect() || source.is_timeout())
    }
}
