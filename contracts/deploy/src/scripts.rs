use fund_me::FundMe;
use mock_price_feed::MockPriceFeed;
use soroban_sdk::{token::StellarAssetClient, IntoVal, Val, Vec};
use tracing::{info, warn};

use crate::deployments::{Deployment, FUND_ME, MOCK_PRICE_FEED, NATIVE_ASSET};
use crate::error::DeployError;
use crate::networks::{resolve_native_token, resolve_price_feed};
use crate::verify::verify;
use crate::DeployContext;

/// Decimals of the mock price feed
pub const DECIMALS: u32 = 8;
/// Opening mock price: 2000 USD
pub const INITIAL_ANSWER: i128 = 2_000_0000_0000;
/// Balance minted to every sandbox signer: 10,000 whole tokens
pub const INITIAL_SIGNER_BALANCE: i128 = 10_000 * 10_000_000;

/// One step of a deployment, selected by its tags.
pub trait DeployScript {
    fn name(&self) -> &'static str;

    fn tags(&self) -> &'static [&'static str];

    fn run(&self, ctx: &mut DeployContext) -> Result<(), DeployError>;
}

/// All scripts, in execution order
pub fn all() -> [&'static dyn DeployScript; 2] {
    [&DeployMocks, &DeployFundMe]
}

/// Value token and price feed mocks for development chains.
pub struct DeployMocks;

impl DeployScript for DeployMocks {
    fn name(&self) -> &'static str {
        "00-deploy-mocks"
    }

    fn tags(&self) -> &'static [&'static str] {
        &["all", "mocks"]
    }

    fn run(&self, ctx: &mut DeployContext) -> Result<(), DeployError> {
        if !ctx.deployments.network().is_development {
            return Ok(());
        }

        info!("Local network detected! Deploying mocks...");
        let env = ctx.deployments.env().clone();
        let deployer = ctx.deployments.deployer().clone();

        let asset = env.register_stellar_asset_contract_v2(deployer.clone());
        let asset_admin = StellarAssetClient::new(&env, &asset.address());
        for signer in ctx.deployments.signers() {
            asset_admin.mint(signer, &INITIAL_SIGNER_BALANCE);
        }
        ctx.deployments.save(Deployment {
            name: NATIVE_ASSET.to_string(),
            address: asset.address(),
            args: (deployer,).into_val(&env),
        });

        let feed = env.register(MockPriceFeed, (DECIMALS, INITIAL_ANSWER));
        ctx.deployments.save(Deployment {
            name: MOCK_PRICE_FEED.to_string(),
            address: feed,
            args: (DECIMALS, INITIAL_ANSWER).into_val(&env),
        });

        info!("Mocks deployed!");
        info!("------------------------------------------------");
        Ok(())
    }
}

/// FundMe itself, owned by the deployer account.
pub struct DeployFundMe;

impl DeployScript for DeployFundMe {
    fn name(&self) -> &'static str {
        "01-deploy-fund-me"
    }

    fn tags(&self) -> &'static [&'static str] {
        &["all", "fundme"]
    }

    fn run(&self, ctx: &mut DeployContext) -> Result<(), DeployError> {
        let env = ctx.deployments.env().clone();
        let network = ctx.deployments.network().clone();
        let deployer = ctx.deployments.deployer().clone();

        let price_feed = resolve_price_feed(&ctx.table, &ctx.deployments, network.chain_id)?;
        let token = resolve_native_token(&ctx.table, &ctx.deployments, network.chain_id)?;

        info!("----------------------------------------------------");
        info!("Deploying FundMe and waiting for confirmations...");
        let args = (deployer, price_feed, token);
        let address = env.register(FundMe, args.clone());
        ctx.deployments
            .wait_confirmations(network.block_confirmations);
        info!("FundMe deployed at {:?}", address);

        let args: Vec<Val> = args.into_val(&env);
        let deployment = Deployment {
            name: FUND_ME.to_string(),
            address,
            args,
        };
        ctx.deployments.save(deployment.clone());

        if network.is_development {
            return Ok(());
        }
        match (ctx.verifier.as_deref(), ctx.api_key.as_deref()) {
            (Some(verifier), Some(api_key)) => verify(verifier, &deployment, api_key),
            _ => {
                warn!(
                    "Skipping verification on {}: no verifier or API key",
                    network.name
                );
                Ok(())
            }
        }
    }
}
