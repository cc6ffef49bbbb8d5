#![no_std]

mod errors;
mod events;
mod storage;

pub use errors::MockPriceFeedError;
pub use price_feed_interface::RoundData;

use events::AnswerUpdatedEvent;
use price_feed_interface::PriceFeedInterface;
use soroban_sdk::{contract, contractimpl, panic_with_error, Env, String};
use storage::DataKey;

const DESCRIPTION: &str = "mock price feed";
const VERSION: u32 = 0;

/// Stand-in oracle for local chains. Anyone may push answers.
#[contract]
pub struct MockPriceFeed;

#[contractimpl]
impl MockPriceFeed {
    pub fn __constructor(env: Env, decimals: u32, initial_answer: i128) {
        env.storage().instance().set(&DataKey::Decimals, &decimals);
        Self::update_answer(env, initial_answer);
    }

    /// Open a new round with `answer`, stamped with the current ledger time.
    pub fn update_answer(env: Env, answer: i128) {
        let round_id = Self::latest_round(&env) + 1;
        let now = env.ledger().timestamp();
        Self::store_round(
            &env,
            RoundData {
                round_id,
                answer,
                started_at: now,
                updated_at: now,
                answered_in_round: round_id,
            },
        );
    }

    /// Write an explicit round and make it the latest one.
    pub fn update_round_data(
        env: Env,
        round_id: u64,
        answer: i128,
        timestamp: u64,
        started_at: u64,
    ) {
        Self::store_round(
            &env,
            RoundData {
                round_id,
                answer,
                started_at,
                updated_at: timestamp,
                answered_in_round: round_id,
            },
        );
    }

    pub fn get_round_data(env: Env, round_id: u64) -> Result<RoundData, MockPriceFeedError> {
        env.storage()
            .persistent()
            .get(&DataKey::Round(round_id))
            .ok_or(MockPriceFeedError::RoundNotFound)
    }

    fn latest_round(env: &Env) -> u64 {
        env.storage()
            .instance()
            .get(&DataKey::LatestRound)
            .unwrap_or(0)
    }

    fn store_round(env: &Env, round: RoundData) {
        env.storage()
            .persistent()
            .set(&DataKey::Round(round.round_id), &round);
        env.storage()
            .instance()
            .set(&DataKey::LatestRound, &round.round_id);

        AnswerUpdatedEvent {
            round_id: round.round_id,
            answer: round.answer,
            updated_at: round.updated_at,
        }
        .publish(env);
    }
}

#[contractimpl]
impl PriceFeedInterface for MockPriceFeed {
    fn decimals(env: Env) -> u32 {
        env.storage()
            .instance()
            .get(&DataKey::Decimals)
            .unwrap_or(0)
    }

    fn description(env: Env) -> String {
        String::from_str(&env, DESCRIPTION)
    }

    fn version(_env: Env) -> u32 {
        VERSION
    }

    fn latest_round_data(env: Env) -> RoundData {
        let round_id = Self::latest_round(&env);
        match env.storage().persistent().get(&DataKey::Round(round_id)) {
            Some(round) => round,
            None => panic_with_error!(&env, MockPriceFeedError::RoundNotFound),
        }
    }
}
