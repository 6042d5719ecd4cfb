//! An in-memory chain for running the funding ledger off-chain.
//!
//! Accounts hold native balances, contracts get CREATE addresses from the
//! deployer's nonce, and every call is all-or-nothing, as on a real network.

use std::collections::{HashMap, HashSet};

use alloy_primitives::{Address, U256};
use thiserror::Error;

use crate::ledger::{FundingLedger, NativeTransfer};
use crate::oracle::{MockV3Aggregator, PriceSource};
use crate::types::{errors::FundMeError, mock_initial_answer, LOCAL_CHAIN_ID, MOCK_DECIMALS};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NetworkError {
    #[error("account {account} holds {balance} wei, cannot send {value}")]
    InsufficientBalance {
        account: Address,
        balance: U256,
        value: U256,
    },

    #[error("call reverted: {0:?}")]
    Reverted(FundMeError),
}

impl From<FundMeError> for NetworkError {
    fn from(err: FundMeError) -> Self {
        NetworkError::Reverted(err)
    }
}

pub type NetworkResult<T> = core::result::Result<T, NetworkError>;

/// Native balances of externally owned accounts.
#[derive(Debug, Clone, Default)]
pub struct AccountBook {
    balances: HashMap<Address, U256>,
    rejecting: HashSet<Address>,
}

impl AccountBook {
    pub fn balance_of(&self, account: Address) -> U256 {
        self.balances.get(&account).copied().unwrap_or_default()
    }

    pub fn credit(&mut self, account: Address, amount: U256) {
        let balance = self.balance_of(account);
        self.balances.insert(account, balance.saturating_add(amount));
    }

    fn debit(&mut self, account: Address, value: U256) -> NetworkResult<()> {
        let balance = self.balance_of(account);
        if balance < value {
            return Err(NetworkError::InsufficientBalance {
                account,
                balance,
                value,
            });
        }
        self.balances.insert(account, balance - value);
        Ok(())
    }
}

impl NativeTransfer for AccountBook {
    fn transfer(&mut self, to: Address, amount: U256) -> core::result::Result<(), Vec<u8>> {
        if self.rejecting.contains(&to) {
            return Err(b"recipient rejects native transfers".to_vec());
        }
        self.credit(to, amount);
        Ok(())
    }
}

pub struct LocalNetwork<P = MockV3Aggregator> {
    chain_id: u64,
    accounts: AccountBook,
    ledger: FundingLedger<P>,
    ledger_address: Address,
    feed_address: Address,
}

impl LocalNetwork<MockV3Aggregator> {
    /// Deploys a mock feed (8 decimals, 2000 USD) and a ledger reading it,
    /// both from `deployer`, who becomes owner.
    pub fn deploy_local(deployer: Address, accounts: &[Address], starting_balance: U256) -> Self {
        let feed_address = deployer.create(0);
        let feed = MockV3Aggregator::new(MOCK_DECIMALS, mock_initial_answer());
        let ledger_address = deployer.create(1);

        Self::genesis(
            LOCAL_CHAIN_ID,
            FundingLedger::new(deployer, feed_address, feed),
            ledger_address,
            feed_address,
            accounts,
            starting_balance,
        )
    }
}

impl<P: PriceSource> LocalNetwork<P> {
    /// Deploys a ledger wired to an already deployed feed at `feed_address`.
    pub fn deploy_with_feed(
        chain_id: u64,
        deployer: Address,
        feed_address: Address,
        source: P,
        accounts: &[Address],
        starting_balance: U256,
    ) -> Self {
        let ledger_address = deployer.create(0);
        Self::genesis(
            chain_id,
            FundingLedger::new(deployer, feed_address, source),
            ledger_address,
            feed_address,
            accounts,
            starting_balance,
        )
    }

    fn genesis(
        chain_id: u64,
        ledger: FundingLedger<P>,
        ledger_address: Address,
        feed_address: Address,
        accounts: &[Address],
        starting_balance: U256,
    ) -> Self {
        let mut book = AccountBook::default();
        for account in accounts {
            book.credit(*account, starting_balance);
        }
        Self {
            chain_id,
            accounts: book,
            ledger,
            ledger_address,
            feed_address,
        }
    }

    pub fn fund(&mut self, from: Address, value: U256) -> NetworkResult<()> {
        let balance = self.accounts.balance_of(from);
        if balance < value {
            return Err(NetworkError::InsufficientBalance {
                account: from,
                balance,
                value,
            });
        }
        self.ledger.fund(from, value)?;
        self.accounts.debit(from, value)
    }

    /// Local-network shorthand for a bare value transfer to the ledger,
    /// booked as a `fund` call. The deployed contract has no receive hook,
    /// so on chain such a transfer reverts.
    pub fn send(&mut self, from: Address, value: U256) -> NetworkResult<()> {
        self.fund(from, value)
    }

    pub fn withdraw(&mut self, from: Address) -> NetworkResult<U256> {
        Ok(self.ledger.withdraw(from, &mut self.accounts)?)
    }

    pub fn cheaper_withdraw(&mut self, from: Address) -> NetworkResult<U256> {
        Ok(self.ledger.cheaper_withdraw(from, &mut self.accounts)?)
    }

    /// Makes `account` refuse (or accept again) incoming native transfers.
    pub fn reject_payments(&mut self, account: Address, reject: bool) {
        if reject {
            self.accounts.rejecting.insert(account);
        } else {
            self.accounts.rejecting.remove(&account);
        }
    }

    pub fn balance_of(&self, account: Address) -> U256 {
        self.accounts.balance_of(account)
    }

    pub fn ledger_balance(&self) -> U256 {
        self.ledger.balance()
    }

    pub fn ledger(&self) -> &FundingLedger<P> {
        &self.ledger
    }

    pub fn price_source_mut(&mut self) -> &mut P {
        self.ledger.price_source_mut()
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    pub fn is_development(&self) -> bool {
        self.chain_id == LOCAL_CHAIN_ID
    }

    pub fn ledger_address(&self) -> Address {
        self.ledger_address
    }

    pub fn feed_address(&self) -> Address {
        self.feed_address
    }
}
