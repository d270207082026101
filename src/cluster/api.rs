//! JSON-RPC message types for the cluster API.
//!
//! Field names follow the wire format (`virtualNetworkID`, `initiatorIP`, ...).

use crate::error::ClusterError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub const METHOD_LIST_VIRTUAL_NETWORKS: &str = "ListVirtualNetworks";
pub const METHOD_LIST_ISCSI_SESSIONS: &str = "ListISCSISessions";

/// RPC error names that mean the credentials were not accepted.
const UNAUTHORIZED_ERROR_NAMES: [&str; 2] = ["xUnauthorized", "xPermissionDenied"];

/// Request envelope.
#[derive(Serialize, Debug)]
pub struct RpcRequest<'a> {
    pub method: &'a str,
    pub params: serde_json::Value,
    pub id: u64,
}

/// Response envelope, either `result` or `error` is set.
#[derive(Deserialize, Debug)]
pub struct RpcResponse<T> {
    pub result: Option<T>,
    pub error: Option<RpcErrorBody>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct RpcErrorBody {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub message: String,
}

/// One storage virtual network (VLAN) with its own SVIP.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct VirtualNetwork {
    #[serde(rename = "virtualNetworkID", default)]
    pub virtual_network_id: u64,
    #[serde(rename = "virtualNetworkTag", default)]
    pub virtual_network_tag: u64,
    #[serde(default)]
    pub name: String,
    pub svip: String,
    pub netmask: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct ListVirtualNetworksResult {
    #[serde(rename = "virtualNetworks")]
    pub virtual_networks: Vec<VirtualNetwork>,
}

/// One active iSCSI session.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct IscsiSession {
    #[serde(rename = "sessionID", default)]
    pub session_id: u64,
    /// `ip:port` of the initiator side of the connection.
    #[serde(rename = "initiatorIP")]
    pub initiator_ip: String,
    #[serde(rename = "initiatorName", default, skip_serializing_if = "Option::is_none")]
    pub initiator_name: Option<String>,
    #[serde(rename = "targetIP", default, skip_serializing_if = "Option::is_none")]
    pub target_ip: Option<String>,
    #[serde(rename = "volumeID", default, skip_serializing_if = "Option::is_none")]
    pub volume_id: Option<u64>,
    #[serde(rename = "nodeID", default, skip_serializing_if = "Option::is_none")]
    pub node_id: Option<u64>,
}

#[derive(Deserialize, Debug)]
pub struct ListIscsiSessionsResult {
    pub sessions: Vec<IscsiSession>,
}

/// Parse a response body, turning RPC errors into [`ClusterError`].
///
/// Parse failures name the JSON path that did not match.
pub fn parse_rpc_response<T: DeserializeOwned>(
    method: &str,
    username: &str,
    body: &str,
) -> Result<T, ClusterError> {
    let mut deserializer = serde_json::Deserializer::from_str(body);
    let response: RpcResponse<T> =
        serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
            log::error!("RESPONSE START:\n\n{body}\n\nRESPONSE END\n");
            ClusterError::Parse {
                context: format!("{method} response"),
                path: e.path().to_string(),
                message: e.inner().to_string(),
            }
        })?;

    if let Some(error) = response.error {
        if UNAUTHORIZED_ERROR_NAMES.contains(&error.name.as_str()) {
            return Err(ClusterError::Unauthorized {
                username: username.to_string(),
            });
        }
        return Err(ClusterError::Api {
            method: method.to_string(),
            name: error.name,
            message: error.message,
        });
    }

    response.result.ok_or_else(|| ClusterError::Parse {
        context: format!("{method} response"),
        path: ".".to_string(),
        message: "neither result nor error present".to_string(),
    })
}
