//! Check whether iSCSI initiators reach a storage cluster from the SVIP's local subnet.
//!
//! The subnet logic lives in [`processing`] and is pure; [`cluster`] fetches its inputs.
//!
//! Only the first netmask octet below 255 is compared. A zero there means the octet must
//! match the SVIP exactly, whichever position it is in: `255.255.0.0` with SVIP `10.10.22.5`
//! passes `10.10.22.x` and reports `10.10.23.1` as routed.

pub mod cluster;
pub mod cmd;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

use cluster::{ClusterSnapshot, Credentials};
use cmd::CommandLine;
use models::{InvalidAddressPolicy, SubnetReport};
use std::error::Error;

/// Classify the sessions in a snapshot against its first virtual network.
pub fn check_snapshot(
    snapshot: &ClusterSnapshot,
    policy: InvalidAddressPolicy,
) -> Result<SubnetReport, Box<dyn Error>> {
    let inputs = snapshot.subnet_inputs()?;
    log::info!(
        "checking {} session(s) on {} against svip {}",
        inputs.initiators.len(),
        snapshot.mvip,
        inputs.svip
    );
    let report = processing::check_subnet(&inputs.netmask, &inputs.svip, &inputs.initiators, policy)?;
    Ok(report)
}

/// Log in to the cluster and collect its virtual networks and iSCSI sessions.
pub async fn fetch_snapshot(
    mvip: &str,
    api_version: &str,
    credentials: Credentials,
    interactive: bool,
) -> Result<ClusterSnapshot, Box<dyn Error>> {
    let (client, virtual_networks) =
        cluster::connect(mvip, api_version, credentials, interactive).await?;
    let sessions = client.list_iscsi_sessions().await?;
    Ok(ClusterSnapshot::new(client.mvip(), virtual_networks, sessions))
}

/// Load or fetch the cluster data named on the command line, then classify it.
pub async fn run(cmd: &CommandLine) -> Result<SubnetReport, Box<dyn Error>> {
    let snapshot = match (&cmd.snapshot, &cmd.mvip) {
        (Some(path), _) => cluster::read_snapshot(path)?,
        (None, Some(mvip)) => {
            let credentials = cluster::resolve_credentials(
                cmd.username.clone(),
                cmd.password.clone(),
                cmd.interactive(),
            )?;
            let snapshot =
                fetch_snapshot(mvip, &cmd.api_version, credentials, cmd.interactive()).await?;
            if cmd.save_snapshot {
                // the MVIP may have been re-entered while connecting
                let file = cluster::default_snapshot_file(&snapshot.mvip);
                cluster::write_snapshot(&file, &snapshot)?;
            }
            snapshot
        }
        (None, None) => return Err(error::ClusterError::MissingSetting("mvip").into()),
    };

    check_snapshot(&snapshot, cmd.policy())
}
