//! Cluster snapshots.
//!
//! A snapshot holds the virtual network and session listings of one run so the check can be
//! repeated offline, or against data captured on another host.

use super::api::{IscsiSession, VirtualNetwork};
use crate::error::ClusterError;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ClusterSnapshot {
    pub mvip: String,
    /// RFC 3339 capture time.
    pub captured_at: String,
    pub virtual_networks: Vec<VirtualNetwork>,
    pub sessions: Vec<IscsiSession>,
}

/// Netmask, SVIP and initiator addresses picked out of a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubnetInputs {
    pub netmask: String,
    pub svip: String,
    /// In session listing order.
    pub initiators: Vec<String>,
}

impl ClusterSnapshot {
    pub fn new(
        mvip: &str,
        virtual_networks: Vec<VirtualNetwork>,
        sessions: Vec<IscsiSession>,
    ) -> ClusterSnapshot {
        ClusterSnapshot {
            mvip: mvip.to_string(),
            captured_at: chrono::Utc::now().to_rfc3339(),
            virtual_networks,
            sessions,
        }
    }

    /// Inputs for the subnet check.
    ///
    /// Only the first virtual network is used; others are reported and ignored.
    pub fn subnet_inputs(&self) -> Result<SubnetInputs, ClusterError> {
        let vlan = self
            .virtual_networks
            .first()
            .ok_or_else(|| ClusterError::NoVirtualNetworks {
                mvip: self.mvip.clone(),
            })?;
        if self.virtual_networks.len() > 1 {
            log::warn!(
                "cluster {} has {} virtual networks, only checking the first: '{}' tag {}",
                self.mvip,
                self.virtual_networks.len(),
                vlan.name,
                vlan.virtual_network_tag
            );
        }
        Ok(SubnetInputs {
            netmask: vlan.netmask.clone(),
            svip: vlan.svip.clone(),
            initiators: self.sessions.iter().map(|s| s.initiator_ip.clone()).collect(),
        })
    }
}

/// Default snapshot file name for a cluster, one per day.
pub fn default_snapshot_file(mvip: &str) -> String {
    let now = chrono::Local::now();
    let mvip = mvip.trim().replace([':', '/'], "_");
    format!("cluster_snapshot_{mvip}_{}.json", now.format("%Y-%m-%d"))
}

/// Read a snapshot written by [`write_snapshot`].
pub fn read_snapshot(path: &str) -> Result<ClusterSnapshot, ClusterError> {
    if !Path::new(path).exists() {
        return Err(ClusterError::Snapshot {
            path: path.to_string(),
            message: "file does not exist".to_string(),
        });
    }
    log::info!("Reading snapshot file: {path}");
    let json = std::fs::read_to_string(path).map_err(|e| ClusterError::Snapshot {
        path: path.to_string(),
        message: e.to_string(),
    })?;

    let mut deserializer = serde_json::Deserializer::from_str(&json);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| ClusterError::Parse {
        context: format!("snapshot {path}"),
        path: e.path().to_string(),
        message: e.inner().to_string(),
    })
}

pub fn write_snapshot(path: &str, snapshot: &ClusterSnapshot) -> Result<(), ClusterError> {
    let json = serde_json::to_string_pretty(snapshot).map_err(|e| ClusterError::Snapshot {
        path: path.to_string(),
        message: format!("Error serializing JSON: {e}"),
    })?;
    log::warn!("Writing snapshot file: {path}");
    std::fs::write(path, json).map_err(|e| ClusterError::Snapshot {
        path: path.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SNAPSHOT_01: &str = "src/tests/test_data/cluster_snapshot_01.json";
    const SNAPSHOT_MULTI_VLAN: &str = "src/tests/test_data/cluster_snapshot_multi_vlan.json";

    #[test]
    fn test_read_snapshot() {
        let snapshot = read_snapshot(SNAPSHOT_01).expect("Error reading snapshot");
        assert_eq!(snapshot.mvip, "10.10.20.50");
        assert_eq!(snapshot.virtual_networks.len(), 1);
        assert_eq!(snapshot.sessions.len(), 5);

        let inputs = snapshot.subnet_inputs().unwrap();
        assert_eq!(inputs.netmask, "255.255.254.0");
        assert_eq!(inputs.svip, "10.10.22.5");
        assert_eq!(inputs.initiators[0], "10.10.22.99:3260");
        assert_eq!(inputs.initiators.len(), 5);
    }

    #[test]
    fn test_multi_vlan_uses_first() {
        let snapshot = read_snapshot(SNAPSHOT_MULTI_VLAN).expect("Error reading snapshot");
        assert_eq!(snapshot.virtual_networks.len(), 2);
        let inputs = snapshot.subnet_inputs().unwrap();
        assert_eq!(inputs.svip, "192.168.5.10");
        assert_eq!(inputs.netmask, "255.255.255.0");
    }

    #[test]
    fn test_no_virtual_networks() {
        let snapshot = ClusterSnapshot::new("10.0.0.50", vec![], vec![]);
        let err = snapshot.subnet_inputs().unwrap_err();
        assert!(matches!(err, ClusterError::NoVirtualNetworks { .. }));
    }

    #[test]
    fn test_read_missing_snapshot() {
        let err = read_snapshot("src/tests/test_data/does_not_exist.json").unwrap_err();
        assert!(matches!(err, ClusterError::Snapshot { .. }));
    }

    #[test]
    fn test_write_then_read_snapshot() {
        let snapshot = read_snapshot(SNAPSHOT_01).unwrap();
        let path = std::env::temp_dir().join(format!(
            "iscsi_subnet_check_snapshot_{}.json",
            std::process::id()
        ));
        let path = path.to_str().unwrap();
        write_snapshot(path, &snapshot).unwrap();
        let reread = read_snapshot(path).unwrap();
        std::fs::remove_file(path).ok();
        assert_eq!(reread, snapshot);
    }

    #[test]
    fn test_default_snapshot_file() {
        let name = default_snapshot_file("10.0.0.50:443");
        assert!(name.starts_with("cluster_snapshot_10.0.0.50_443_"), "{name}");
        assert!(name.ends_with(".json"));
    }
}
