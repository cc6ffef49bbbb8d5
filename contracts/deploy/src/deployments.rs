use std::collections::BTreeMap;

use soroban_sdk::{
    testutils::{Address as _, Ledger},
    Address, Env, Val, Vec,
};
use tracing::info;

use crate::config::Network;
use crate::error::DeployError;

pub const MOCK_PRICE_FEED: &str = "MockPriceFeed";
pub const NATIVE_ASSET: &str = "NativeAsset";
pub const FUND_ME: &str = "FundMe";

/// Number of signer accounts generated for a sandbox
pub const SIGNER_COUNT: usize = 10;

/// Seconds added to the ledger clock per confirmation
const LEDGER_CLOSE_SECONDS: u64 = 5;

/// A contract deployed by one of the deploy scripts
#[derive(Debug, Clone)]
pub struct Deployment {
    pub name: String,
    pub address: Address,
    pub args: Vec<Val>,
}

/// Named registry of the contracts deployed on one environment.
pub struct Deployments {
    env: Env,
    network: Network,
    signers: std::vec::Vec<Address>,
    records: BTreeMap<String, Deployment>,
}

impl Deployments {
    pub fn new(env: &Env, network: Network) -> Self {
        // Sandbox signers approve every invocation, on any network
        // the registry is simulated for
        env.mock_all_auths();

        let signers = (0..SIGNER_COUNT).map(|_| Address::generate(env)).collect();

        Self {
            env: env.clone(),
            network,
            signers,
            records: BTreeMap::new(),
        }
    }

    pub fn env(&self) -> &Env {
        &self.env
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    pub fn signers(&self) -> &[Address] {
        &self.signers
    }

    /// The named deployer account: signer 0
    pub fn deployer(&self) -> &Address {
        &self.signers[0]
    }

    pub fn get(&self, name: &str) -> Result<&Deployment, DeployError> {
        self.records
            .get(name)
            .ok_or_else(|| DeployError::NotDeployed(name.to_string()))
    }

    pub fn has(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn save(&mut self, deployment: Deployment) {
        info!(
            "saved deployment {} at {:?}",
            deployment.name, deployment.address
        );
        self.records.insert(deployment.name.clone(), deployment);
    }

    /// Advance the ledger by `confirmations` closes.
    pub fn wait_confirmations(&self, confirmations: u32) {
        self.env.ledger().with_mut(|li| {
            li.sequence_number += confirmations;
            li.timestamp += u64::from(confirmations) * LEDGER_CLOSE_SECONDS;
        });
    }
}
