use std::collections::BTreeMap;

use soroban_sdk::{Address, Env};
use stellar_strkey::Strkey;

use crate::config::{DeployConfig, LOCAL_CHAIN_ID};
use crate::deployments::{Deployments, MOCK_PRICE_FEED, NATIVE_ASSET};
use crate::error::DeployError;

/// What the table knows about one chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkEntry {
    pub name: String,
    pub price_feed: Option<String>,
    pub native_token: Option<String>,
}

/// Immutable chain id -> network lookup, built once from the config.
#[derive(Debug, Clone, Default)]
pub struct NetworkTable {
    entries: BTreeMap<u32, NetworkEntry>,
}

impl NetworkTable {
    /// When several networks share a chain id, the first by name wins.
    pub fn from_config(config: &DeployConfig) -> Self {
        let mut entries = BTreeMap::new();
        for (name, settings) in &config.networks {
            entries
                .entry(settings.chain_id)
                .or_insert_with(|| NetworkEntry {
                    name: name.clone(),
                    price_feed: settings.price_feed.clone(),
                    native_token: settings.native_token.clone(),
                });
        }
        Self { entries }
    }

    pub fn get(&self, chain_id: u32) -> Option<&NetworkEntry> {
        self.entries.get(&chain_id)
    }

    pub fn price_feed(&self, env: &Env, chain_id: u32) -> Result<Address, DeployError> {
        let entry = self
            .get(chain_id)
            .ok_or(DeployError::UnknownChain(chain_id))?;
        let strkey = entry
            .price_feed
            .as_deref()
            .ok_or_else(|| DeployError::MissingPriceFeed {
                network: entry.name.clone(),
                chain_id,
            })?;
        parse_address(env, strkey)
    }

    pub fn native_token(&self, env: &Env, chain_id: u32) -> Result<Address, DeployError> {
        let entry = self
            .get(chain_id)
            .ok_or(DeployError::UnknownChain(chain_id))?;
        let strkey = entry
            .native_token
            .as_deref()
            .ok_or_else(|| DeployError::MissingToken {
                network: entry.name.clone(),
                chain_id,
            })?;
        parse_address(env, strkey)
    }
}

/// Price oracle for `chain_id`: the mock on the local chain, the table entry elsewhere.
pub fn resolve_price_feed(
    table: &NetworkTable,
    deployments: &Deployments,
    chain_id: u32,
) -> Result<Address, DeployError> {
    if chain_id == LOCAL_CHAIN_ID {
        Ok(deployments.get(MOCK_PRICE_FEED)?.address.clone())
    } else {
        table.price_feed(deployments.env(), chain_id)
    }
}

/// Value token for `chain_id`, resolved the same way as the price feed.
pub fn resolve_native_token(
    table: &NetworkTable,
    deployments: &Deployments,
    chain_id: u32,
) -> Result<Address, DeployError> {
    if chain_id == LOCAL_CHAIN_ID {
        Ok(deployments.get(NATIVE_ASSET)?.address.clone())
    } else {
        table.native_token(deployments.env(), chain_id)
    }
}

/// Parse a contract (`C...`) or account (`G...`) strkey.
pub fn parse_address(env: &Env, strkey: &str) -> Result<Address, DeployError> {
    match Strkey::from_string(strkey) {
        Ok(Strkey::Contract(_)) | Ok(Strkey::PublicKeyEd25519(_)) => {
            Ok(Address::from_str(env, strkey))
        }
        _ => Err(DeployError::InvalidAddress(strkey.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Network, NetworkSettings};

    const TESTNET_FEED: &str = "CAAQCAIBAEAQCAIBAEAQCAIBAEAQCAIBAEAQCAIBAEAQCAIBAEAQC526";
    const TESTNET_TOKEN: &str = "CADQOBYHA4DQOBYHA4DQOBYHA4DQOBYHA4DQOBYHA4DQOBYHA4DQP5KR";

    fn config() -> DeployConfig {
        let mut config = DeployConfig::default();
        config.networks.insert(
            "testnet".to_string(),
            NetworkSettings {
                chain_id: 2,
                price_feed: Some(TESTNET_FEED.to_string()),
                native_token: Some(TESTNET_TOKEN.to_string()),
                block_confirmations: Some(6),
            },
        );
        config.networks.insert(
            "futurenet".to_string(),
            NetworkSettings {
                chain_id: 3,
                ..Default::default()
            },
        );
        config
    }

    fn local_deployments(env: &Env) -> Deployments {
        Deployments::new(
            env,
            Network {
                name: "sandbox".to_string(),
                chain_id: LOCAL_CHAIN_ID,
                block_confirmations: 1,
                is_development: true,
            },
        )
    }

    #[test]
    fn test_table_lookup() {
        let env = Env::default();
        let table = NetworkTable::from_config(&config());

        assert_eq!(table.get(LOCAL_CHAIN_ID).unwrap().name, "localhost");
        assert_eq!(table.get(2).unwrap().name, "testnet");
        assert_eq!(
            table.price_feed(&env, 2).unwrap(),
            Address::from_str(&env, TESTNET_FEED)
        );
        assert_eq!(
            table.native_token(&env, 2).unwrap(),
            Address::from_str(&env, TESTNET_TOKEN)
        );
    }

    #[test]
    fn test_unknown_chain() {
        let env = Env::default();
        let table = NetworkTable::from_config(&config());

        let result = table.price_feed(&env, 11155111);
        assert!(matches!(result, Err(DeployError::UnknownChain(11155111))));
    }

    #[test]
    fn test_entry_without_price_feed() {
        let env = Env::default();
        let table = NetworkTable::from_config(&config());

        let result = table.price_feed(&env, 3);
        assert!(matches!(
            result,
            Err(DeployError::MissingPriceFeed { chain_id: 3, .. })
        ));
        let result = table.native_token(&env, 3);
        assert!(matches!(result, Err(DeployError::MissingToken { .. })));
    }

    #[test]
    fn test_local_chain_requires_mock() {
        let env = Env::default();
        let table = NetworkTable::from_config(&config());
        let deployments = local_deployments(&env);

        let result = resolve_price_feed(&table, &deployments, LOCAL_CHAIN_ID);
        assert!(matches!(result, Err(DeployError::NotDeployed(name)) if name == MOCK_PRICE_FEED));
    }

    #[test]
    fn test_public_chain_ignores_mock() {
        let env = Env::default();
        let table = NetworkTable::from_config(&config());
        let deployments = local_deployments(&env);

        let feed = resolve_price_feed(&table, &deployments, 2).unwrap();
        assert_eq!(feed, Address::from_str(&env, TESTNET_FEED));
    }

    #[test]
    fn test_parse_address_rejects_malformed() {
        let env = Env::default();
        let lowercase = TESTNET_FEED.to_lowercase();
        // Last character changed, so the checksum no longer matches
        let bad_checksum = format!("{}7", &TESTNET_FEED[..TESTNET_FEED.len() - 1]);

        for bad in [
            "",
            "not-an-address",
            &TESTNET_FEED[1..],
            lowercase.as_str(),
            bad_checksum.as_str(),
        ] {
            let result = parse_address(&env, bad);
            assert!(matches!(result, Err(DeployError::InvalidAddress(_))));
        }
        assert!(parse_address(&env, TESTNET_FEED).is_ok());
    }
}
