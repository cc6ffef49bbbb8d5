#![no_std]

mod errors;
mod events;
mod price_converter;
mod storage;
mod token;

pub use errors::FundMeError;
pub use price_converter::USD_DECIMALS;

use events::{FundedEvent, WithdrawnEvent};
use price_feed_interface::PriceFeedClient;
use soroban_sdk::{contract, contractimpl, Address, Env};
use storage::DataKey;

/// Smallest accepted contribution: 50 USD with `USD_DECIMALS` digits.
pub const MINIMUM_USD: i128 = 50 * 10i128.pow(USD_DECIMALS);

#[contract]
pub struct FundMe;

/// How a withdrawal walks the funder list.
#[derive(Clone, Copy)]
enum FunderScan {
    /// Re-read the funder count from storage on every step.
    ReadEachStep,
    /// Read the count once and iterate over the cached value.
    Cached,
}

#[contractimpl]
impl FundMe {
    /// Set the owner, the price feed and the token that carries value.
    /// None of them can change afterwards.
    pub fn __constructor(env: Env, owner: Address, price_feed: Address, token: Address) {
        env.storage().instance().set(&DataKey::Owner, &owner);
        env.storage().instance().set(&DataKey::PriceFeed, &price_feed);
        env.storage().instance().set(&DataKey::Token, &token);
        env.storage().instance().set(&DataKey::FunderCount, &0u32);
    }

    /// Contribute `amount` token units. The amount must be worth at least
    /// `MINIMUM_USD` at the current feed price.
    pub fn fund(env: Env, funder: Address, amount: i128) -> Result<(), FundMeError> {
        // Require funder authorization
        funder.require_auth();

        if amount <= 0 {
            return Err(FundMeError::InsufficientValue);
        }

        let usd_value = Self::get_conversion_rate(env.clone(), amount)?;
        if usd_value < MINIMUM_USD {
            return Err(FundMeError::InsufficientValue);
        }

        // Transfer tokens from funder to contract
        let token = Self::get_token(env.clone())?;
        let contract_address = env.current_contract_address();
        token::transfer(&env, &token, &funder, &contract_address, &amount);

        // Update the ledger entry
        let amount_key = DataKey::AmountFunded(funder.clone());
        let total_funded = env
            .storage()
            .persistent()
            .get::<_, i128>(&amount_key)
            .unwrap_or(0)
            .checked_add(amount)
            .ok_or(FundMeError::ArithmeticOverflow)?;
        env.storage().persistent().set(&amount_key, &total_funded);

        // Append to the funder list
        let index = Self::funder_count(&env);
        let next_count = index
            .checked_add(1)
            .ok_or(FundMeError::ArithmeticOverflow)?;
        env.storage()
            .persistent()
            .set(&DataKey::Funder(index), &funder);
        env.storage()
            .instance()
            .set(&DataKey::FunderCount, &next_count);

        FundedEvent {
            funder,
            amount,
            total_funded,
        }
        .publish(&env);

        Ok(())
    }

    /// Send the whole balance to the owner and reset every funder's record.
    ///
    /// Returns the amount paid out.
    pub fn withdraw(env: Env, caller: Address) -> Result<i128, FundMeError> {
        Self::withdraw_all(&env, caller, FunderScan::ReadEachStep)
    }

    /// Same effect as [`FundMe::withdraw`], with a single read of the funder
    /// count.
    pub fn cheaper_withdraw(env: Env, caller: Address) -> Result<i128, FundMeError> {
        Self::withdraw_all(&env, caller, FunderScan::Cached)
    }

    /// USD value of `amount` token units at the latest feed price.
    pub fn get_conversion_rate(env: Env, amount: i128) -> Result<i128, FundMeError> {
        let price_feed = Self::get_price_feed(env.clone())?;
        let token = Self::get_token(env.clone())?;
        let price = price_converter::get_price(&env, &price_feed)?;
        price_converter::get_conversion_rate(amount, price, token::decimals(&env, &token))
    }

    pub fn get_minimum_usd(_env: Env) -> i128 {
        MINIMUM_USD
    }

    /// Version reported by the configured price feed
    pub fn get_version(env: Env) -> Result<u32, FundMeError> {
        let price_feed = Self::get_price_feed(env.clone())?;
        Ok(PriceFeedClient::new(&env, &price_feed).version())
    }

    /// Total contributed by `funder` since the last withdrawal
    pub fn get_address_to_amount_funded(env: Env, funder: Address) -> i128 {
        env.storage()
            .persistent()
            .get(&DataKey::AmountFunded(funder))
            .unwrap_or(0)
    }

    /// Funder at position `index` in the list
    pub fn get_funder(env: Env, index: u32) -> Result<Address, FundMeError> {
        if index >= Self::funder_count(&env) {
            return Err(FundMeError::FunderIndexOutOfRange);
        }
        env.storage()
            .persistent()
            .get(&DataKey::Funder(index))
            .ok_or(FundMeError::FunderIndexOutOfRange)
    }

    pub fn get_funders_count(env: Env) -> u32 {
        Self::funder_count(&env)
    }

    pub fn get_owner(env: Env) -> Result<Address, FundMeError> {
        env.storage()
            .instance()
            .get(&DataKey::Owner)
            .ok_or(FundMeError::NotInitialized)
    }

    pub fn get_price_feed(env: Env) -> Result<Address, FundMeError> {
        env.storage()
            .instance()
            .get(&DataKey::PriceFeed)
            .ok_or(FundMeError::NotInitialized)
    }

    pub fn get_token(env: Env) -> Result<Address, FundMeError> {
        env.storage()
            .instance()
            .get(&DataKey::Token)
            .ok_or(FundMeError::NotInitialized)
    }
}

impl FundMe {
    fn funder_count(env: &Env) -> u32 {
        env.storage()
            .instance()
            .get(&DataKey::FunderCount)
            .unwrap_or(0)
    }

    fn withdraw_all(env: &Env, caller: Address, scan: FunderScan) -> Result<i128, FundMeError> {
        let owner = Self::get_owner(env.clone())?;
        if caller != owner {
            return Err(FundMeError::NotOwner);
        }

        // Require owner authorization
        caller.require_auth();

        let token = Self::get_token(env.clone())?;

        // Settle state before any value leaves the contract
        let cleared = match scan {
            FunderScan::ReadEachStep => {
                let mut index = 0;
                while index < Self::funder_count(env) {
                    Self::clear_funder(env, index);
                    index += 1;
                }
                index
            }
            FunderScan::Cached => {
                let count = Self::funder_count(env);
                for index in 0..count {
                    Self::clear_funder(env, index);
                }
                count
            }
        };
        env.storage().instance().set(&DataKey::FunderCount, &0u32);

        // Transfer the whole balance from contract to owner
        let contract_address = env.current_contract_address();
        let amount = token::balance(env, &token, &contract_address);
        if amount > 0 {
            token::transfer(env, &token, &contract_address, &owner, &amount);
        }

        WithdrawnEvent {
            owner,
            amount,
            funders_cleared: cleared,
        }
        .publish(env);

        Ok(amount)
    }

    fn clear_funder(env: &Env, index: u32) {
        let funder_key = DataKey::Funder(index);
        if let Some(funder) = env.storage().persistent().get::<_, Address>(&funder_key) {
            env.storage()
                .persistent()
                .remove(&DataKey::AmountFunded(funder));
        }
        env.storage().persistent().remove(&funder_key);
    }
}
