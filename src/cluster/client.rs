//! JSON-RPC client for the cluster management VIP.

use super::api::{
    parse_rpc_response, IscsiSession, ListIscsiSessionsResult, ListVirtualNetworksResult,
    RpcRequest, VirtualNetwork, METHOD_LIST_ISCSI_SESSIONS, METHOD_LIST_VIRTUAL_NETWORKS,
};
use super::credentials::{reprompt_credentials, reprompt_mvip, Credentials};
use crate::config;
use crate::error::ClusterError;
use colored::Colorize;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// JSON-RPC endpoint for a management VIP.
///
/// # Examples
/// ```
/// use iscsi_subnet_check::cluster::endpoint;
/// assert_eq!(endpoint("10.0.0.50", "8.0"), "https://10.0.0.50/json-rpc/8.0");
/// ```
pub fn endpoint(mvip: &str, api_version: &str) -> String {
    format!("https://{}/json-rpc/{}", mvip.trim(), api_version.trim())
}

pub struct ClusterClient {
    client: reqwest::Client,
    mvip: String,
    url: String,
    credentials: Credentials,
    next_id: AtomicU64,
}

impl ClusterClient {
    /// Build a client; no request is sent until the first call.
    ///
    /// Clusters ship with self-signed certificates so certificate validation is off.
    pub fn new(
        mvip: &str,
        api_version: &str,
        credentials: Credentials,
    ) -> Result<ClusterClient, ClusterError> {
        let url = endpoint(mvip, api_version);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config::REQUEST_TIMEOUT_SECS))
            .danger_accept_invalid_certs(true)
            .build()
            .map_err(|source| ClusterError::Http {
                url: url.clone(),
                source,
            })?;
        Ok(ClusterClient {
            client,
            mvip: mvip.trim().to_string(),
            url,
            credentials,
            next_id: AtomicU64::new(1),
        })
    }

    pub fn mvip(&self) -> &str {
        &self.mvip
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub async fn list_virtual_networks(&self) -> Result<Vec<VirtualNetwork>, ClusterError> {
        let result: ListVirtualNetworksResult = self.call(METHOD_LIST_VIRTUAL_NETWORKS).await?;
        log::info!(
            "got {} virtual network(s) from {}",
            result.virtual_networks.len(),
            self.mvip
        );
        Ok(result.virtual_networks)
    }

    pub async fn list_iscsi_sessions(&self) -> Result<Vec<IscsiSession>, ClusterError> {
        let result: ListIscsiSessionsResult = self.call(METHOD_LIST_ISCSI_SESSIONS).await?;
        log::info!("got {} iSCSI session(s) from {}", result.sessions.len(), self.mvip);
        Ok(result.sessions)
    }

    async fn call<T: serde::de::DeserializeOwned>(&self, method: &str) -> Result<T, ClusterError> {
        let request = RpcRequest {
            method,
            params: serde_json::json!({}),
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
        };
        let body = serde_json::to_string(&request).map_err(|e| ClusterError::Parse {
            context: format!("{method} request"),
            path: ".".to_string(),
            message: e.to_string(),
        })?;
        log::debug!("call {method} on {url}", url = self.url.on_blue());

        let http_error = |source| ClusterError::Http {
            url: self.url.clone(),
            source,
        };
        let response = self
            .client
            .post(&self.url)
            .basic_auth(&self.credentials.username, Some(self.credentials.password()))
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(http_error)?;

        let status = response.status();
        let text = response.text().await.map_err(http_error)?;
        log::debug!("{method} status={status} body.len()={}", text.len());

        check_status(method, status, &self.credentials.username)?;
        if !status.is_success() {
            // error bodies usually still carry an RPC error object
            return match parse_rpc_response::<serde_json::Value>(
                method,
                &self.credentials.username,
                &text,
            ) {
                Err(e @ ClusterError::Api { .. }) | Err(e @ ClusterError::Unauthorized { .. }) => {
                    Err(e)
                }
                _ => Err(ClusterError::Status {
                    method: method.to_string(),
                    status: status.as_u16(),
                }),
            };
        }

        parse_rpc_response(method, &self.credentials.username, &text)
    }
}

/// Map an authentication failure status to [`ClusterError::Unauthorized`].
pub fn check_status(method: &str, status: StatusCode, username: &str) -> Result<(), ClusterError> {
    if status == StatusCode::UNAUTHORIZED {
        log::warn!(
            "{failed} {method}: credentials for '{username}' rejected",
            failed = "failed".on_red()
        );
        return Err(ClusterError::Unauthorized {
            username: username.to_string(),
        });
    }
    Ok(())
}

/// Connect to the cluster and fetch its virtual networks, which also validates the login.
///
/// When `interactive` is set, rejected credentials are prompted for again and an MVIP that
/// does not respond is asked for again, up to [`config::MAX_LOGIN_ATTEMPTS`] attempts in total.
pub async fn connect(
    mvip: &str,
    api_version: &str,
    mut credentials: Credentials,
    interactive: bool,
) -> Result<(ClusterClient, Vec<VirtualNetwork>), ClusterError> {
    let mut mvip = mvip.trim().to_string();
    let mut attempt = 1;
    loop {
        log::info!(
            "connecting to {mvip} as '{user}' (attempt {attempt}/{max})",
            user = credentials.username,
            max = config::MAX_LOGIN_ATTEMPTS
        );
        let client = ClusterClient::new(&mvip, api_version, credentials.clone())?;
        let error = match client.list_virtual_networks().await {
            Ok(virtual_networks) => return Ok((client, virtual_networks)),
            Err(e) => e,
        };
        match retry_action(&error, attempt, interactive) {
            Some(RetryAction::Credentials) => {
                log::warn!("{error}, asking again");
                tokio::time::sleep(Duration::from_millis(config::LOGIN_RETRY_SLEEP_MSEC)).await;
                credentials = reprompt_credentials(&credentials)?;
            }
            Some(RetryAction::Mvip) => {
                log::warn!("{mvip} failed to respond: {error}");
                mvip = reprompt_mvip(&mvip)?;
            }
            None => return Err(error),
        }
        attempt += 1;
    }
}

/// What to ask the user for before the next connection attempt.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum RetryAction {
    Credentials,
    Mvip,
}

fn retry_action(error: &ClusterError, attempt: u32, interactive: bool) -> Option<RetryAction> {
    if !should_retry_login(attempt, interactive) {
        return None;
    }
    if error.is_unauthorized() {
        Some(RetryAction::Credentials)
    } else if error.is_unreachable() {
        Some(RetryAction::Mvip)
    } else {
        None
    }
}

fn should_retry_login(attempt: u32, interactive: bool) -> bool {
    interactive && attempt < config::MAX_LOGIN_ATTEMPTS
}
