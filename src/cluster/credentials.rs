//! Cluster credentials and connection prompts.
//!
//! Values come from the command line or environment first; anything missing is prompted for.

use crate::error::ClusterError;
use std::fmt;

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Credentials {
        Credentials {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"********")
            .finish()
    }
}

/// Build credentials from optional settings, prompting for missing parts when `interactive`.
///
/// Empty strings count as missing.
pub fn resolve_credentials(
    username: Option<String>,
    password: Option<String>,
    interactive: bool,
) -> Result<Credentials, ClusterError> {
    let username = match username.filter(|u| !u.trim().is_empty()) {
        Some(username) => username,
        None if interactive => prompt_username(None)?,
        None => return Err(ClusterError::MissingSetting("username")),
    };
    let password = match password.filter(|p| !p.is_empty()) {
        Some(password) => password,
        None if interactive => prompt_password(&username)?,
        None => return Err(ClusterError::MissingSetting("password")),
    };
    Ok(Credentials::new(username, password))
}

/// Ask again after the cluster rejected `previous`, offering the same username.
pub fn reprompt_credentials(previous: &Credentials) -> Result<Credentials, ClusterError> {
    let username = prompt_username(Some(&previous.username))?;
    let password = prompt_password(&username)?;
    Ok(Credentials::new(username, password))
}

/// Ask for another management VIP after `previous` failed to respond.
pub fn reprompt_mvip(previous: &str) -> Result<String, ClusterError> {
    let mvip = dialoguer::Input::<String>::new()
        .with_prompt("Cluster MVIP")
        .default(previous.to_string())
        .interact_text()
        .map_err(|e| ClusterError::Prompt(e.to_string()))?;
    Ok(mvip.trim().to_string())
}

fn prompt_username(default: Option<&str>) -> Result<String, ClusterError> {
    let mut input = dialoguer::Input::<String>::new().with_prompt("Cluster username");
    if let Some(default) = default {
        input = input.default(default.to_string());
    }
    input
        .interact_text()
        .map_err(|e| ClusterError::Prompt(e.to_string()))
}

fn prompt_password(username: &str) -> Result<String, ClusterError> {
    dialoguer::Password::new()
        .with_prompt(format!("Password for {username}"))
        .interact()
        .map_err(|e| ClusterError::Prompt(e.to_string()))
}
