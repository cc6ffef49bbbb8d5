use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum FundMeError {
    /// "FundMe__NotOwner"
    NotOwner = 1,
    /// "You need to spend more ETH!"
    InsufficientValue = 2,
    FunderIndexOutOfRange = 3,
    InvalidPrice = 4,
    ArithmeticOverflow = 5,
    NotInitialized = 6,
}
