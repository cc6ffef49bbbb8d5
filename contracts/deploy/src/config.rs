use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::DeployError;

/// Chain id of the local sandbox. Price feeds on it come from the mock deployment.
pub const LOCAL_CHAIN_ID: u32 = 31337;

/// Environment variable holding the block explorer API key
pub const EXPLORER_API_KEY_VAR: &str = "EXPLORER_API_KEY";

const DEFAULT_NETWORK: &str = "sandbox";
const DEFAULT_BLOCK_CONFIRMATIONS: u32 = 1;

/// Deployment configuration, usually read from a `deploy.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeployConfig {
    #[serde(default = "default_network")]
    pub default_network: String,

    /// Networks on which mocks are deployed and verification is skipped
    #[serde(default = "default_development_chains")]
    pub development_chains: Vec<String>,

    #[serde(default = "default_networks")]
    pub networks: BTreeMap<String, NetworkSettings>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkSettings {
    pub chain_id: u32,
    /// Strkey of the price oracle contract
    #[serde(default)]
    pub price_feed: Option<String>,
    /// Strkey of the token contract that carries value
    #[serde(default)]
    pub native_token: Option<String>,
    #[serde(default)]
    pub block_confirmations: Option<u32>,
}

/// The network a deployment runs against, resolved from the config
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Network {
    pub name: String,
    pub chain_id: u32,
    pub block_confirmations: u32,
    pub is_development: bool,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            default_network: default_network(),
            development_chains: default_development_chains(),
            networks: default_networks(),
        }
    }
}

impl DeployConfig {
    /// Load configuration from a TOML file
    pub fn load_from(path: &Path) -> Result<Self, DeployError> {
        let content = fs::read_to_string(path).map_err(|source| DeployError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, DeployError> {
        Ok(toml::from_str(content)?)
    }

    pub fn is_development_chain(&self, name: &str) -> bool {
        self.development_chains.iter().any(|chain| chain == name)
    }

    /// Resolve a network by name, falling back to `default_network`
    pub fn network(&self, name: Option<&str>) -> Result<Network, DeployError> {
        let name = name.unwrap_or(&self.default_network);
        let settings = self
            .networks
            .get(name)
            .ok_or_else(|| DeployError::UnknownNetwork(name.to_string()))?;

        Ok(Network {
            name: name.to_string(),
            chain_id: settings.chain_id,
            block_confirmations: settings
                .block_confirmations
                .unwrap_or(DEFAULT_BLOCK_CONFIRMATIONS),
            is_development: self.is_development_chain(name),
        })
    }
}

/// API key for contract verification, if one is set and non-empty
pub fn explorer_api_key() -> Option<String> {
    std::env::var(EXPLORER_API_KEY_VAR)
        .ok()
        .filter(|key| !key.trim().is_empty())
}

fn default_network() -> String {
    DEFAULT_NETWORK.to_string()
}

fn default_development_chains() -> Vec<String> {
    vec!["sandbox".to_string(), "localhost".to_string()]
}

fn default_networks() -> BTreeMap<String, NetworkSettings> {
    let local = NetworkSettings {
        chain_id: LOCAL_CHAIN_ID,
        ..Default::default()
    };
    BTreeMap::from([
        ("sandbox".to_string(), local.clone()),
        ("localhost".to_string(), local),
    ])
}
