#![cfg(test)]
extern crate std;

use soroban_sdk::{token::TokenClient, Address, Env};

// The suite drives the contracts through the same scripts an operator runs
use fund_me::{FundMeClient, FundMeError};
use fund_me_deploy::{fixture, Deployments, FUND_ME, MOCK_PRICE_FEED, NATIVE_ASSET};

// One whole native token, in stroops
const SEND_VALUE: i128 = 10_000_000;

struct Suite<'a> {
    deployments: Deployments,
    fund_me: FundMeClient<'a>,
    fund_me_address: Address,
    token: TokenClient<'a>,
    deployer: Address,
}

fn setup<'a>(env: &Env) -> Suite<'a> {
    let deployments = fixture(env, &["all"]).unwrap();

    let fund_me_address = deployments.get(FUND_ME).unwrap().address.clone();
    let token_address = deployments.get(NATIVE_ASSET).unwrap().address.clone();
    let deployer = deployments.deployer().clone();

    Suite {
        fund_me: FundMeClient::new(env, &fund_me_address),
        token: TokenClient::new(env, &token_address),
        fund_me_address,
        deployer,
        deployments,
    }
}

// constructor

#[test]
fn test_sets_the_aggregator_address_correctly() {
    let env = Env::default();
    let suite = setup(&env);

    let mock_price_feed = &suite.deployments.get(MOCK_PRICE_FEED).unwrap().address;
    assert_eq!(&suite.fund_me.get_price_feed(), mock_price_feed);
}

// fund

#[test]
fn test_fails_if_you_dont_send_enough() {
    let env = Env::default();
    let suite = setup(&env);

    let result = suite.fund_me.try_fund(&suite.deployer, &0);
    assert_eq!(result, Err(Ok(FundMeError::InsufficientValue)));
    assert_eq!(suite.token.balance(&suite.fund_me_address), 0);
}

#[test]
fn test_updates_the_amount_funded_data_structure() {
    let env = Env::default();
    let suite = setup(&env);

    suite.fund_me.fund(&suite.deployer, &SEND_VALUE);

    let response = suite.fund_me.get_address_to_amount_funded(&suite.deployer);
    assert_eq!(response, SEND_VALUE);
}

#[test]
fn test_adds_funder_to_array_of_funders() {
    let env = Env::default();
    let suite = setup(&env);

    suite.fund_me.fund(&suite.deployer, &SEND_VALUE);

    assert_eq!(suite.fund_me.get_funder(&0), suite.deployer);
}

// withdraw

#[test]
fn test_withdraws_from_a_single_funder() {
    let env = Env::default();
    let suite = setup(&env);
    suite.fund_me.fund(&suite.deployer, &SEND_VALUE);

    // Arrange
    let starting_fund_me_balance = suite.token.balance(&suite.fund_me_address);
    let starting_deployer_balance = suite.token.balance(&suite.deployer);

    // Act
    suite.fund_me.withdraw(&suite.deployer);

    // Assert: the sandbox charges no fees, so value is conserved exactly
    let ending_fund_me_balance = suite.token.balance(&suite.fund_me_address);
    let ending_deployer_balance = suite.token.balance(&suite.deployer);
    assert_eq!(ending_fund_me_balance, 0);
    assert_eq!(
        starting_fund_me_balance + starting_deployer_balance,
        ending_deployer_balance
    );
}

#[test]
fn test_allows_us_to_withdraw_with_multiple_funders() {
    let env = Env::default();
    let suite = setup(&env);
    suite.fund_me.fund(&suite.deployer, &SEND_VALUE);

    // Arrange
    let accounts = suite.deployments.signers();
    for account in &accounts[1..6] {
        suite.fund_me.fund(account, &SEND_VALUE);
    }
    let starting_fund_me_balance = suite.token.balance(&suite.fund_me_address);
    let starting_deployer_balance = suite.token.balance(&suite.deployer);
    assert_eq!(starting_fund_me_balance, 6 * SEND_VALUE);

    // Act
    let withdrawn = suite.fund_me.cheaper_withdraw(&suite.deployer);
    std::println!("Withdrawn: {withdrawn}");

    // Assert
    let ending_fund_me_balance = suite.token.balance(&suite.fund_me_address);
    let ending_deployer_balance = suite.token.balance(&suite.deployer);
    assert_eq!(ending_fund_me_balance, 0);
    assert_eq!(
        starting_fund_me_balance + starting_deployer_balance,
        ending_deployer_balance
    );

    // Funders are reset
    let result = suite.fund_me.try_get_funder(&0);
    assert_eq!(result, Err(Ok(FundMeError::FunderIndexOutOfRange)));
    for account in &accounts[1..6] {
        assert_eq!(suite.fund_me.get_address_to_amount_funded(account), 0);
    }
}

#[test]
fn test_only_allows_the_owner_to_withdraw() {
    let env = Env::default();
    let suite = setup(&env);
    suite.fund_me.fund(&suite.deployer, &SEND_VALUE);

    let attacker = &suite.deployments.signers()[1];
    let result = suite.fund_me.try_withdraw(attacker);
    assert_eq!(result, Err(Ok(FundMeError::NotOwner)));

    // Balance, ledger and list are untouched
    assert_eq!(suite.token.balance(&suite.fund_me_address), SEND_VALUE);
    assert_eq!(
        suite.fund_me.get_address_to_amount_funded(&suite.deployer),
        SEND_VALUE
    );
    assert_eq!(suite.fund_me.get_funder(&0), suite.deployer);
}
