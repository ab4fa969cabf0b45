/// Process-level settings for the deploy and withdraw binaries, read from
/// environment variables.
use std::env;

#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// The file path to the networks configuration file.
    pub config_file_path: String,
    /// The chain identifier of the network to operate on.
    pub chain_id: u64,
    /// Optional RPC URL override; when unset, the network's first configured
    /// URL is used.
    pub rpc_url: Option<String>,
    /// Directory holding compiled contract artifacts (`<name>.json`).
    pub artifacts_dir: String,
    /// Directory where per-network deployment registries are persisted.
    pub deployments_dir: String,
    /// Timeout in seconds for ledger RPC requests.
    pub rpc_timeout_seconds: u64,
}

impl HarnessConfig {
    /// Creates a new `HarnessConfig` instance from environment variables.
    ///
    /// # Defaults
    ///
    /// - `CONFIG_DIR` defaults to `"./config"`.
    /// - `CONFIG_FILE_NAME` defaults to `"config.json"`.
    /// - `CHAIN_ID` defaults to `31337` (local development network).
    /// - `ARTIFACTS_DIR` defaults to `"artifacts"`.
    /// - `DEPLOYMENTS_DIR` defaults to `"deployments"`.
    /// - `RPC_TIMEOUT_SECONDS` defaults to `30`.
    pub fn from_env() -> Self {
        let conf_dir = env::var("CONFIG_DIR").unwrap_or_else(|_| "./config".to_string());
        let conf_dir = format!("{}/", conf_dir.trim_end_matches('/'));

        let config_file_name =
            env::var("CONFIG_FILE_NAME").unwrap_or_else(|_| "config.json".to_string());
        let config_file_path = format!("{}{}", conf_dir, config_file_name);

        Self {
            config_file_path,
            chain_id: env::var("CHAIN_ID")
                .unwrap_or_else(|_| "31337".to_string())
                .parse()
                .unwrap_or(31337),
            rpc_url: env::var("RPC_URL").ok(),
            artifacts_dir: env::var("ARTIFACTS_DIR").unwrap_or_else(|_| "artifacts".to_string()),
            deployments_dir: env::var("DEPLOYMENTS_DIR")
                .unwrap_or_else(|_| "deployments".to_string()),
            rpc_timeout_seconds: env::var("RPC_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .unwrap_or(30),
        }
    }
}
