use alloy_primitives::{I256, U256};

pub mod events;
pub mod errors;
pub mod interfaces;

/// Decimals of the native currency's smallest unit (wei).
pub const NATIVE_DECIMALS: u8 = 18;

/// Minimum contribution in USD with 18 decimals, i.e. 50 * 10^18.
pub const MINIMUM_USD: U256 = U256::from_limbs([13_106_511_852_580_896_768, 2, 0, 0]);

/// Feeds reporting more decimals than this are rejected.
pub const MAX_FEED_DECIMALS: u8 = 36;

pub const LOCAL_CHAIN_ID: u64 = 31337;

// Mock feed seeded on local networks: 2000 USD per native unit, 8 decimals.
pub const MOCK_DECIMALS: u8 = 8;
pub const MOCK_INITIAL_ANSWER: u64 = 200_000_000_000;

/// One whole native unit in its smallest denomination.
pub fn native_unit() -> U256 {
    pow10(NATIVE_DECIMALS)
}

pub fn pow10(exponent: u8) -> U256 {
    U256::from(10u64).pow(U256::from(exponent))
}

pub fn mock_initial_answer() -> I256 {
    I256::from_raw(U256::from(MOCK_INITIAL_ANSWER))
}

/// A price round as reported by an aggregator feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundData {
    pub round_id: U256,
    pub answer: I256,
    pub started_at: U256,
    pub updated_at: U256,
    pub answered_in_round: U256,
}

/// How settlement reads the contributor list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    /// One storage read per entry.
    PerSlot,
    /// Copy the list into memory once and iterate the copy.
    Cached,
}
