#![cfg_attr(all(target_arch = "wasm32", not(feature = "export-abi")), no_main)]

extern crate alloc;

#[cfg(target_arch = "wasm32")]
extern crate mini_alloc;

#[cfg(target_arch = "wasm32")]
#[global_allocator]
static ALLOC: mini_alloc::MiniAlloc = mini_alloc::MiniAlloc::INIT;

pub mod types;
pub mod oracle;
pub mod ledger;
pub mod devnet;

pub use ledger::{FundingLedger, LedgerStore, NativeTransfer};
pub use oracle::{MockV3Aggregator, PriceSource};
pub use types::errors::{FundMeError, Result};

// Export the on-chain contract as the default entrypoint
#[cfg(any(target_arch = "wasm32", feature = "export-abi"))]
pub use ledger::FundMe as Contract;
