//! Deployment tooling for FundMe.
//!
//! A [`DeployContext`] binds one network from the [`DeployConfig`] to a
//! Soroban environment and runs the tagged deploy scripts against it.
//! [`fixture`] is the shortcut tests use on the local sandbox.

pub mod config;
pub mod deployments;
mod error;
pub mod networks;
pub mod scripts;
pub mod verify;

pub use config::{DeployConfig, Network, NetworkSettings, LOCAL_CHAIN_ID};
pub use deployments::{Deployment, Deployments, FUND_ME, MOCK_PRICE_FEED, NATIVE_ASSET};
pub use error::DeployError;
pub use networks::{NetworkEntry, NetworkTable};
pub use scripts::DeployScript;
pub use verify::{Verifier, VerifyError};

use soroban_sdk::Env;
use tracing::info;

/// Runs deploy scripts against an in-process Soroban environment.
///
/// Every network, public ones included, is simulated: the environment mocks
/// all authorizations and the signers are generated sandbox accounts. A
/// non-development network only changes where the price feed and token
/// addresses come from and whether verification runs. Nothing is submitted
/// to a live chain.
pub struct DeployContext {
    pub deployments: Deployments,
    pub table: NetworkTable,
    verifier: Option<Box<dyn Verifier>>,
    api_key: Option<String>,
}

impl DeployContext {
    /// Prepare a deployment on `network`, or on the config's default network.
    ///
    /// The explorer API key is taken from the environment; see
    /// [`config::explorer_api_key`].
    pub fn new(env: &Env, config: &DeployConfig, network: Option<&str>) -> Result<Self, DeployError> {
        let network = config.network(network)?;
        info!(
            "Deploying to {} (chain id {})",
            network.name, network.chain_id
        );

        Ok(Self {
            deployments: Deployments::new(env, network),
            table: NetworkTable::from_config(config),
            verifier: None,
            api_key: config::explorer_api_key(),
        })
    }

    pub fn with_verifier(mut self, verifier: impl Verifier + 'static) -> Self {
        self.verifier = Some(Box::new(verifier));
        self
    }

    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key;
        self
    }

    /// Run every script carrying at least one of `tags`, in order.
    pub fn run(&mut self, tags: &[&str]) -> Result<(), DeployError> {
        for script in scripts::all() {
            if script.tags().iter().any(|tag| tags.contains(tag)) {
                info!("Running deploy script {}", script.name());
                script.run(self)?;
            }
        }
        Ok(())
    }

    pub fn into_deployments(self) -> Deployments {
        self.deployments
    }
}

/// Deploy everything tagged with `tags` on the default local sandbox.
pub fn fixture(env: &Env, tags: &[&str]) -> Result<Deployments, DeployError> {
    let mut ctx = DeployContext::new(env, &DeployConfig::default(), None)?;
    ctx.run(tags)?;
    Ok(ctx.into_deployments())
}
