//! Global settings.

/// log4rs configuration file, relative to the working directory.
pub const LOG_CONFIG_FILE: &str = "log4rs.yml";

/// Element API version used in the JSON-RPC endpoint path.
pub const DEFAULT_API_VERSION: &str = "8.0";

/// Per-request timeout for cluster calls.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Total login attempts, including the first, before giving up on bad credentials.
pub const MAX_LOGIN_ATTEMPTS: u32 = 3;

/// Pause after a rejected login before prompting again.
pub const LOGIN_RETRY_SLEEP_MSEC: u64 = 500;

pub const ENV_MVIP: &str = "SF_MVIP";
pub const ENV_USERNAME: &str = "SF_USERNAME";
pub const ENV_PASSWORD: &str = "SF_PASSWORD";
