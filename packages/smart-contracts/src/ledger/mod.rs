use alloy_primitives::{Address, U256};

use crate::types::{
    errors::{overflow, require_in_range, require_minimum, Result},
    Settlement,
};

pub mod funding_ledger;
#[cfg(any(target_arch = "wasm32", feature = "export-abi"))]
pub mod fund_me;

pub use funding_ledger::{FundingLedger, MemoryStore};
#[cfg(any(target_arch = "wasm32", feature = "export-abi"))]
pub use fund_me::FundMe;

/// Storage backing the contributor records and the contributor list.
pub trait LedgerStore {
    fn amount_funded(&self, funder: Address) -> U256;

    fn set_amount_funded(&mut self, funder: Address, amount: U256);

    fn funder_count(&self) -> usize;

    fn funder_at(&self, index: usize) -> Option<Address>;

    fn push_funder(&mut self, funder: Address);

    fn clear_funders(&mut self);

    /// Reads the whole list in one pass.
    fn funders(&self) -> Vec<Address> {
        (0..self.funder_count())
            .filter_map(|i| self.funder_at(i))
            .collect()
    }
}

/// Pays native value out of the ledger.
pub trait NativeTransfer {
    fn transfer(&mut self, to: Address, amount: U256) -> core::result::Result<(), Vec<u8>>;
}

/// Books a contribution of `amount` by `funder` once it covers `minimum`.
///
/// The funder is appended to the list on every call, so repeat funders
/// appear once per contribution. Returns the funder's new total.
pub fn record_contribution<S: LedgerStore + ?Sized>(
    store: &mut S,
    funder: Address,
    amount: U256,
    minimum: U256,
) -> Result<U256> {
    require_minimum(amount, minimum)?;

    let total = store
        .amount_funded(funder)
        .checked_add(amount)
        .ok_or_else(overflow)?;

    store.push_funder(funder);
    store.set_amount_funded(funder, total);
    Ok(total)
}

/// Zeroes every listed funder's record and empties the list.
///
/// Returns how many list entries were cleared, duplicates included.
pub fn settle<S: LedgerStore + ?Sized>(store: &mut S, mode: Settlement) -> usize {
    match mode {
        Settlement::PerSlot => {
            let count = store.funder_count();
            for i in 0..count {
                if let Some(funder) = store.funder_at(i) {
                    store.set_amount_funded(funder, U256::ZERO);
                }
            }
            store.clear_funders();
            count
        }
        Settlement::Cached => {
            let funders = store.funders();
            for funder in &funders {
                store.set_amount_funded(*funder, U256::ZERO);
            }
            store.clear_funders();
            funders.len()
        }
    }
}

pub fn funder<S: LedgerStore + ?Sized>(store: &S, index: U256) -> Result<Address> {
    let index = require_in_range(index, store.funder_count())?;
    // in range, so the slot is populated
    Ok(store.funder_at(index).unwrap_or_default())
}
