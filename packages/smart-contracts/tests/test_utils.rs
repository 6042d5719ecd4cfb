#![allow(dead_code)]

use alloy_primitives::{Address, U256};
use fund_me_contracts::devnet::LocalNetwork;
use fund_me_contracts::types::native_unit;

pub const STARTING_BALANCE_ETHER: u64 = 100;

pub struct TestContext {
    pub network: LocalNetwork,
    pub test_accounts: Vec<Address>,
}

impl TestContext {
    pub fn new() -> Self {
        let test_accounts = generate_test_accounts(10);
        let network = LocalNetwork::deploy_local(
            test_accounts[0],
            &test_accounts,
            ether(STARTING_BALANCE_ETHER),
        );

        Self {
            network,
            test_accounts,
        }
    }

    pub fn deployer(&self) -> Address {
        self.test_accounts[0]
    }

    pub fn funder(&self) -> Address {
        self.test_accounts[1]
    }

    pub fn attacker(&self) -> Address {
        self.test_accounts[9]
    }

    /// Funds one ether from each of `test_accounts[1..=count]`.
    pub fn fund_from_many(&mut self, count: usize) -> Vec<Address> {
        let funders: Vec<Address> = self.test_accounts[1..=count].to_vec();
        for funder in &funders {
            self.network
                .fund(*funder, ether(1))
                .expect("Funding failed");
        }
        funders
    }
}

pub fn generate_test_accounts(count: usize) -> Vec<Address> {
    (0..count)
        .map(|i| {
            let mut bytes = [0u8; 20];
            bytes[0] = 0xaa;
            bytes[19] = i as u8 + 1;
            Address::from(bytes)
        })
        .collect()
}

pub fn ether(amount: u64) -> U256 {
    U256::from(amount) * native_unit()
}

/// Minimum contribution with the seeded 2000 USD mock price: 0.025 ether.
pub fn seeded_minimum() -> U256 {
    U256::from(25_000_000_000_000_000u64)
}

pub fn expect_error<T, E>(result: Result<T, E>, expected_error: &str)
where
    E: std::fmt::Debug,
{
    match result {
        Ok(_) => panic!("Expected error '{}' but operation succeeded", expected_error),
        Err(e) => {
            let error_string = format!("{:?}", e);
            assert!(
                error_string.contains(expected_error),
                "Expected error containing '{}' but got '{}'",
                expected_error,
                error_string
            );
        }
    }
}
