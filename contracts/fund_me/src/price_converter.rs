use crate::errors::FundMeError;
use price_feed_interface::PriceFeedClient;
use soroban_sdk::{Address, Env};

/// Fractional digits carried by prices and USD values.
pub const USD_DECIMALS: u32 = 18;

/// Latest feed answer, rescaled to `USD_DECIMALS`.
pub fn get_price(env: &Env, price_feed: &Address) -> Result<i128, FundMeError> {
    let feed = PriceFeedClient::new(env, price_feed);
    let answer = feed.latest_round_data().answer;
    if answer <= 0 {
        return Err(FundMeError::InvalidPrice);
    }
    rescale(answer, feed.decimals(), USD_DECIMALS)
}

/// USD value (with `USD_DECIMALS` digits) of `amount` base units of a token
/// that has `token_decimals` digits, at `price` USD per whole token.
pub fn get_conversion_rate(
    amount: i128,
    price: i128,
    token_decimals: u32,
) -> Result<i128, FundMeError> {
    let scaled = amount
        .checked_mul(price)
        .ok_or(FundMeError::ArithmeticOverflow)?;
    Ok(scaled / pow10(token_decimals)?)
}

fn rescale(value: i128, from: u32, to: u32) -> Result<i128, FundMeError> {
    if from <= to {
        value
            .checked_mul(pow10(to - from)?)
            .ok_or(FundMeError::ArithmeticOverflow)
    } else {
        Ok(value / pow10(from - to)?)
    }
}

fn pow10(exp: u32) -> Result<i128, FundMeError> {
    10i128
        .checked_pow(exp)
        .ok_or(FundMeError::ArithmeticOverflow)
}
