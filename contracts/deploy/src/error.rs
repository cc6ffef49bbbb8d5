use std::path::PathBuf;

use thiserror::Error;

use crate::verify::VerifyError;

#[derive(Debug, Error)]
pub enum DeployError {
    #[error("No network configuration for chain id {0}")]
    UnknownChain(u32),

    #[error("Network `{0}` is not configured")]
    UnknownNetwork(String),

    #[error("Network `{network}` (chain id {chain_id}) has no price feed address")]
    MissingPriceFeed { network: String, chain_id: u32 },

    #[error("Network `{network}` (chain id {chain_id}) has no native token address")]
    MissingToken { network: String, chain_id: u32 },

    #[error("`{0}` is not a valid strkey address")]
    InvalidAddress(String),

    #[error("No deployment named `{0}`")]
    NotDeployed(String),

    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse deploy config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Verification failed: {0}")]
    Verification(#[from] VerifyError),
}
