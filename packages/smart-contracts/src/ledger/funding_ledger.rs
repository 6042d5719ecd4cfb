use std::collections::HashMap;

use alloy_primitives::{Address, U256};

use crate::ledger::{self, LedgerStore, NativeTransfer};
use crate::oracle::{self, PriceSource};
use crate::types::{
    errors::{overflow, require_owner, transfer_failed, Result},
    events::{Funded, LedgerEvent, Withdrawn},
    Settlement,
};

/// Contributor records and list held in process memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    address_to_amount_funded: HashMap<Address, U256>,
    funders: Vec<Address>,
}

impl LedgerStore for MemoryStore {
    fn amount_funded(&self, funder: Address) -> U256 {
        self.address_to_amount_funded
            .get(&funder)
            .copied()
            .unwrap_or_default()
    }

    fn set_amount_funded(&mut self, funder: Address, amount: U256) {
        self.address_to_amount_funded.insert(funder, amount);
    }

    fn funder_count(&self) -> usize {
        self.funders.len()
    }

    fn funder_at(&self, index: usize) -> Option<Address> {
        self.funders.get(index).copied()
    }

    fn push_funder(&mut self, funder: Address) {
        self.funders.push(funder);
    }

    fn clear_funders(&mut self) {
        self.funders.clear();
    }

    fn funders(&self) -> Vec<Address> {
        self.funders.clone()
    }
}

/// The funding ledger as an owned value, for hosts and local networks.
///
/// Mirrors the on-chain contract call for call. Every operation either
/// commits in full or leaves the ledger exactly as it found it.
#[derive(Debug)]
pub struct FundingLedger<P> {
    owner: Address,
    price_feed: Address,
    source: P,
    store: MemoryStore,
    balance: U256,
    events: Vec<LedgerEvent>,
}

impl<P: PriceSource> FundingLedger<P> {
    pub fn new(owner: Address, price_feed: Address, source: P) -> Self {
        Self {
            owner,
            price_feed,
            source,
            store: MemoryStore::default(),
            balance: U256::ZERO,
            events: Vec::new(),
        }
    }

    /// Accepts `value` from `caller` if it is worth at least the USD minimum.
    pub fn fund(&mut self, caller: Address, value: U256) -> Result<()> {
        let minimum = oracle::minimum_contribution(&self.source)?;
        let balance = self.balance.checked_add(value).ok_or_else(overflow)?;

        let total = ledger::record_contribution(&mut self.store, caller, value, minimum)?;
        self.balance = balance;

        self.events.push(LedgerEvent::Funded(Funded {
            funder: caller,
            amount: value,
            total_funded: total,
        }));
        Ok(())
    }

    /// Settles every contributor, then pays the whole balance to the owner.
    pub fn withdraw<T: NativeTransfer>(&mut self, caller: Address, payee: &mut T) -> Result<U256> {
        self.settle_and_pay(caller, payee, Settlement::PerSlot)
    }

    /// Same as [`withdraw`](Self::withdraw), iterating an in-memory copy of the list.
    pub fn cheaper_withdraw<T: NativeTransfer>(&mut self, caller: Address, payee: &mut T) -> Result<U256> {
        self.settle_and_pay(caller, payee, Settlement::Cached)
    }

    fn settle_and_pay<T: NativeTransfer>(
        &mut self,
        caller: Address,
        payee: &mut T,
        mode: Settlement,
    ) -> Result<U256> {
        require_owner(caller, self.owner)?;

        let snapshot = self.store.clone();
        let amount = self.balance;

        // state is final before any value leaves the ledger
        let cleared = ledger::settle(&mut self.store, mode);
        self.balance = U256::ZERO;

        if payee.transfer(self.owner, amount).is_err() {
            self.store = snapshot;
            self.balance = amount;
            return Err(transfer_failed(self.owner, amount));
        }

        self.events.push(LedgerEvent::Withdrawn(Withdrawn {
            owner: self.owner,
            amount,
            funders_cleared: U256::from(cleared),
        }));
        Ok(amount)
    }

    pub fn get_owner(&self) -> Address {
        self.owner
    }

    pub fn get_price_feed(&self) -> Address {
        self.price_feed
    }

    pub fn get_funder(&self, index: U256) -> Result<Address> {
        ledger::funder(&self.store, index)
    }

    pub fn get_funder_count(&self) -> U256 {
        U256::from(self.store.funder_count())
    }

    pub fn get_address_to_amount_funded(&self, funder: Address) -> U256 {
        self.store.amount_funded(funder)
    }

    pub fn get_minimum_contribution(&self) -> Result<U256> {
        oracle::minimum_contribution(&self.source)
    }

    pub fn get_conversion_rate(&self, native_amount: U256) -> Result<U256> {
        oracle::get_conversion_rate(&self.source, native_amount)
    }

    pub fn balance(&self) -> U256 {
        self.balance
    }

    pub fn events(&self) -> &[LedgerEvent] {
        &self.events
    }

    pub fn price_source(&self) -> &P {
        &self.source
    }

    pub fn price_source_mut(&mut self) -> &mut P {
        &mut self.source
    }
}
