#![no_std]

use soroban_sdk::{contractclient, contracttype, Env, String};

/// One answer reported by a price feed.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoundData {
    pub round_id: u64,
    pub answer: i128,
    pub started_at: u64,
    pub updated_at: u64,
    pub answered_in_round: u64,
}

/// Aggregator-style price oracle consumed by FundMe.
///
/// `answer` is a fixed-point price with `decimals()` fractional digits.
#[contractclient(name = "PriceFeedClient")]
pub trait PriceFeedInterface {
    fn decimals(env: Env) -> u32;

    fn description(env: Env) -> String;

    fn version(env: Env) -> u32;

    fn latest_round_data(env: Env) -> RoundData;
}
