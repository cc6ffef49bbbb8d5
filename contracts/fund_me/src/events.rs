use soroban_sdk::{contractevent, Address};

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundedEvent {
    #[topic]
    pub funder: Address,
    pub amount: i128,
    pub total_funded: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawnEvent {
    #[topic]
    pub owner: Address,
    pub amount: i128,
    pub funders_cleared: u32,
}
