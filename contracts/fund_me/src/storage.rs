use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Owner,                 // -> Address
    PriceFeed,             // -> Address
    Token,                 // -> Address
    FunderCount,           // -> u32
    Funder(u32),           // index -> Address
    AmountFunded(Address), // funder -> i128
}
