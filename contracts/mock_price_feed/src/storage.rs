use soroban_sdk::contracttype;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Decimals,    // -> u32
    LatestRound, // -> u64
    Round(u64),  // round_id -> RoundData
}
