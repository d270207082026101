//! Command line arguments.

use crate::config;
use crate::models::InvalidAddressPolicy;
use crate::output::OutputFormat;
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "iscsi-subnet-check")]
#[command(about = "Check whether iSCSI initiators reach the cluster SVIP from its local subnet or via a route.")]
#[command(long_about = "Check whether iSCSI initiators reach the cluster SVIP from its local subnet or via a route.

Only the first netmask octet below 255 is compared. A 0 in that octet means the initiator's \
octet must equal the SVIP's exactly: with netmask 255.255.0.0 and SVIP 10.10.22.5, \
10.10.22.x passes and 10.10.23.1 is reported as routed.")]
pub struct CommandLine {
    /// Cluster management VIP (host or host:port)
    #[arg(long, env = config::ENV_MVIP)]
    pub mvip: Option<String>,

    /// Cluster admin username
    #[arg(short, long, env = config::ENV_USERNAME)]
    pub username: Option<String>,

    /// Cluster admin password
    #[arg(short, long, env = config::ENV_PASSWORD, hide_env_values = true)]
    pub password: Option<String>,

    /// Element API version
    #[arg(long, default_value = config::DEFAULT_API_VERSION)]
    pub api_version: String,

    /// Read cluster data from a snapshot file instead of the cluster
    #[arg(long, conflicts_with = "save_snapshot")]
    pub snapshot: Option<String>,

    /// Save the fetched cluster data to a snapshot file
    #[arg(long)]
    pub save_snapshot: bool,

    /// Report malformed initiator addresses and carry on instead of stopping
    #[arg(long)]
    pub skip_invalid: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Terminal)]
    pub format: OutputFormat,

    /// Never prompt; fail when credentials are missing or rejected
    #[arg(long)]
    pub no_prompt: bool,

    /// log4rs configuration file
    #[arg(long, default_value = config::LOG_CONFIG_FILE)]
    pub log_config: String,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn policy(&self) -> InvalidAddressPolicy {
        if self.skip_invalid {
            InvalidAddressPolicy::Skip
        } else {
            InvalidAddressPolicy::Abort
        }
    }

    pub fn interactive(&self) -> bool {
        !self.no_prompt
    }
}
