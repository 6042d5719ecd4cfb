use alloy_primitives::{Address, U256};
use alloy_sol_types::sol;
use stylus_sdk::prelude::*;

sol! {
    #[derive(Debug, PartialEq, Eq)]
    error InsufficientFunds(uint256 sent, uint256 minimum);

    #[derive(Debug, PartialEq, Eq)]
    error NotOwner(address caller);

    #[derive(Debug, PartialEq, Eq)]
    error IndexOutOfRange(uint256 index, uint256 length);

    #[derive(Debug, PartialEq, Eq)]
    error OracleReadFailure(string reason);

    #[derive(Debug, PartialEq, Eq)]
    error TransferFailed(address recipient, uint256 amount);

    #[derive(Debug, PartialEq, Eq)]
    error AlreadyInitialized();

    #[derive(Debug, PartialEq, Eq)]
    error Overflow();
}

#[derive(SolidityError, thiserror::Error, Debug, PartialEq, Eq)]
pub enum FundMeError {
    #[error("you need to spend more: {0:?}")]
    InsufficientFunds(InsufficientFunds),
    #[error("caller is not the owner: {0:?}")]
    NotOwner(NotOwner),
    #[error("funder index out of range: {0:?}")]
    IndexOutOfRange(IndexOutOfRange),
    #[error("price feed read failed: {0:?}")]
    OracleReadFailure(OracleReadFailure),
    #[error("native transfer failed: {0:?}")]
    TransferFailed(TransferFailed),
    #[error("already initialized")]
    AlreadyInitialized(AlreadyInitialized),
    #[error("arithmetic overflow")]
    Overflow(Overflow),
}

pub type Result<T> = core::result::Result<T, FundMeError>;

pub fn require_owner(caller: Address, owner: Address) -> Result<()> {
    if caller != owner {
        Err(FundMeError::NotOwner(NotOwner { caller }))
    } else {
        Ok(())
    }
}

pub fn require_minimum(sent: U256, minimum: U256) -> Result<()> {
    if sent < minimum {
        Err(FundMeError::InsufficientFunds(InsufficientFunds { sent, minimum }))
    } else {
        Ok(())
    }
}

/// Checks `index` against the list length and narrows it to a `usize`.
pub fn require_in_range(index: U256, length: usize) -> Result<usize> {
    if index >= U256::from(length) {
        return Err(FundMeError::IndexOutOfRange(IndexOutOfRange {
            index,
            length: U256::from(length),
        }));
    }
    // below `length`, so it fits the low limb
    Ok(index.as_limbs()[0] as usize)
}

pub fn oracle_failure(reason: &str) -> FundMeError {
    FundMeError::OracleReadFailure(OracleReadFailure {
        reason: reason.to_string(),
    })
}

pub fn transfer_failed(recipient: Address, amount: U256) -> FundMeError {
    FundMeError::TransferFailed(TransferFailed { recipient, amount })
}

pub fn overflow() -> FundMeError {
    FundMeError::Overflow(Overflow {})
}
