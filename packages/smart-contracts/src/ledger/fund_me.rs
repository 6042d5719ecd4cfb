use alloy_primitives::{Address, U256};
use stylus_sdk::{
    call::{self, Call},
    contract, evm, msg,
    prelude::*,
    storage::{Erase, StorageAddress, StorageMap, StorageU256, StorageVec},
};

use crate::ledger::{self, LedgerStore, NativeTransfer};
use crate::oracle::{self, PriceSource};
use crate::types::{
    errors::{oracle_failure, require_owner, transfer_failed, AlreadyInitialized, FundMeError, Result},
    events::{Funded, Withdrawn},
    interfaces::AggregatorV3Interface,
    RoundData, Settlement,
};

/// Price source backed by a deployed aggregator contract.
struct FeedReader {
    feed: AggregatorV3Interface,
}

impl FeedReader {
    fn new(address: Address) -> Self {
        Self {
            feed: AggregatorV3Interface::new(address),
        }
    }
}

impl PriceSource for FeedReader {
    fn decimals(&self) -> Result<u8> {
        self.feed
            .decimals(Call::new())
            .map_err(|_| oracle_failure("decimals() call failed"))
    }

    fn latest_round(&self) -> Result<RoundData> {
        let (round_id, answer, started_at, updated_at, answered_in_round) = self
            .feed
            .latest_round_data(Call::new())
            .map_err(|_| oracle_failure("latestRoundData() call failed"))?;

        Ok(RoundData {
            round_id: U256::from(round_id),
            answer,
            started_at,
            updated_at,
            answered_in_round: U256::from(answered_in_round),
        })
    }
}

/// Native value transfer out of the executing contract.
struct EvmTransfer;

impl NativeTransfer for EvmTransfer {
    fn transfer(&mut self, to: Address, amount: U256) -> core::result::Result<(), Vec<u8>> {
        call::transfer_eth(to, amount)
    }
}

#[storage]
#[entrypoint]
pub struct FundMe {
    owner: StorageAddress,
    price_feed: StorageAddress,
    address_to_amount_funded: StorageMap<Address, StorageU256>,
    funders: StorageVec<StorageAddress>,
}

#[public]
impl FundMe {
    /// Stands in for a constructor: runs once, the caller becomes owner.
    ///
    /// Until it runs anyone can claim ownership, so deploy and initialize
    /// in the same transaction (e.g. through a factory or multicall).
    pub fn initialize(&mut self, price_feed: Address) -> Result<()> {
        if !self.owner.get().is_zero() {
            return Err(FundMeError::AlreadyInitialized(AlreadyInitialized {}));
        }

        self.owner.set(msg::sender());
        self.price_feed.set(price_feed);
        Ok(())
    }

    #[payable]
    pub fn fund(&mut self) -> Result<()> {
        let funder = msg::sender();
        let amount = msg::value();

        let minimum = oracle::minimum_contribution(&self.feed())?;
        let total_funded = ledger::record_contribution(self, funder, amount, minimum)?;

        evm::log(Funded {
            funder,
            amount,
            total_funded,
        });
        Ok(())
    }

    pub fn withdraw(&mut self) -> Result<()> {
        self.settle_and_pay(Settlement::PerSlot)
    }

    pub fn cheaper_withdraw(&mut self) -> Result<()> {
        self.settle_and_pay(Settlement::Cached)
    }

    pub fn get_owner(&self) -> Address {
        self.owner.get()
    }

    pub fn get_price_feed(&self) -> Address {
        self.price_feed.get()
    }

    pub fn get_funder(&self, index: U256) -> Result<Address> {
        ledger::funder(self, index)
    }

    pub fn get_funder_count(&self) -> U256 {
        U256::from(self.funders.len())
    }

    pub fn get_address_to_amount_funded(&self, funder: Address) -> U256 {
        self.address_to_amount_funded.get(funder)
    }

    pub fn get_minimum_contribution(&self) -> Result<U256> {
        oracle::minimum_contribution(&self.feed())
    }

    pub fn get_conversion_rate(&self, native_amount: U256) -> Result<U256> {
        oracle::get_conversion_rate(&self.feed(), native_amount)
    }
}

// Internal helper functions
impl FundMe {
    fn feed(&self) -> FeedReader {
        FeedReader::new(self.price_feed.get())
    }

    fn settle_and_pay(&mut self, mode: Settlement) -> Result<()> {
        let owner = self.owner.get();
        require_owner(msg::sender(), owner)?;

        // records and list are final before value leaves; a failed transfer
        // reverts the whole call, resets included
        let cleared = ledger::settle(self, mode);
        let amount = contract::balance();
        EvmTransfer
            .transfer(owner, amount)
            .map_err(|_| transfer_failed(owner, amount))?;

        evm::log(Withdrawn {
            owner,
            amount,
            funders_cleared: U256::from(cleared),
        });
        Ok(())
    }
}

impl LedgerStore for FundMe {
    fn amount_funded(&self, funder: Address) -> U256 {
        self.address_to_amount_funded.get(funder)
    }

    fn set_amount_funded(&mut self, funder: Address, amount: U256) {
        self.address_to_amount_funded.insert(funder, amount);
    }

    fn funder_count(&self) -> usize {
        self.funders.len()
    }

    fn funder_at(&self, index: usize) -> Option<Address> {
        self.funders.get(index)
    }

    fn push_funder(&mut self, funder: Address) {
        self.funders.push(funder);
    }

    fn clear_funders(&mut self) {
        self.funders.erase();
    }
}
