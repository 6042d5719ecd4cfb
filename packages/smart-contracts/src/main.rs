#[cfg(feature = "export-abi")]
fn main() {
    stylus_sdk::abi::export::print_abi::<fund_me_contracts::Contract>("MIT", "pragma solidity ^0.8.23;");
}

#[cfg(not(feature = "export-abi"))]
fn main() {
    use fund_me_contracts::types::{interfaces::fund_me_selectors, MINIMUM_USD};

    println!("FundMe Smart Contract");
    println!("=====================");
    println!();
    println!("Crowdfunding contract for Arbitrum Stylus with a USD-denominated minimum");
    println!("contribution of {} (18 decimals), priced through an aggregator feed.", MINIMUM_USD);
    println!();
    println!("Public functions:");
    for (signature, selector) in fund_me_selectors() {
        println!("  0x{}  {}", hex::encode(selector), signature);
    }
    println!();
    println!("Build with `cargo build --release --target wasm32-unknown-unknown`,");
    println!("then call `initialize(address)` with the price feed in the deploying transaction.");
}
