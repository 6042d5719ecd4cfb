mod test_utils;

use alloy_primitives::U256;
use fund_me_contracts::types::events::{LedgerEvent, Withdrawn};
use test_utils::*;

#[cfg(test)]
mod withdraw_tests {
    use super::*;

    #[test]
    fn test_withdraw_from_single_funder() {
        let mut context = TestContext::new();
        let deployer = context.deployer();
        context.network.fund(deployer, ether(1)).expect("Funding failed");

        let starting_ledger_balance = context.network.ledger_balance();
        let starting_deployer_balance = context.network.balance_of(deployer);

        let withdrawn = context.network.withdraw(deployer).expect("Withdraw failed");

        assert_eq!(withdrawn, starting_ledger_balance);
        assert_eq!(context.network.ledger_balance(), U256::ZERO);
        assert_eq!(
            context.network.balance_of(deployer),
            starting_deployer_balance + starting_ledger_balance
        );
        assert_eq!(context.network.ledger().get_address_to_amount_funded(deployer), U256::ZERO);
    }

    #[test]
    fn test_withdraw_with_multiple_funders() {
        let mut context = TestContext::new();
        let deployer = context.deployer();
        let funders = context.fund_from_many(5);

        let starting_deployer_balance = context.network.balance_of(deployer);
        assert_eq!(context.network.ledger_balance(), ether(5));

        context.network.withdraw(deployer).expect("Withdraw failed");

        assert_eq!(context.network.ledger_balance(), U256::ZERO);
        assert_eq!(
            context.network.balance_of(deployer),
            starting_deployer_balance + ether(5)
        );
        expect_error(context.network.ledger().get_funder(U256::ZERO), "IndexOutOfRange");
        for funder in funders {
            assert_eq!(context.network.ledger().get_address_to_amount_funded(funder), U256::ZERO);
        }
    }

    #[test]
    fn test_cheaper_withdraw_with_multiple_funders() {
        let mut context = TestContext::new();
        let deployer = context.deployer();
        let funders = context.fund_from_many(5);

        let starting_deployer_balance = context.network.balance_of(deployer);

        let withdrawn = context
            .network
            .cheaper_withdraw(deployer)
            .expect("Cheaper withdraw failed");

        assert_eq!(withdrawn, ether(5));
        assert_eq!(context.network.ledger_balance(), U256::ZERO);
        assert_eq!(
            context.network.balance_of(deployer),
            starting_deployer_balance + ether(5)
        );
        assert_eq!(context.network.ledger().get_funder_count(), U256::ZERO);
        for funder in funders {
            assert_eq!(context.network.ledger().get_address_to_amount_funded(funder), U256::ZERO);
        }
    }

    #[test]
    fn test_duplicate_entries_are_settled() {
        let mut context = TestContext::new();
        let deployer = context.deployer();
        let funder = context.funder();

        for _ in 0..3 {
            context.network.fund(funder, ether(1)).expect("Funding failed");
        }

        context.network.withdraw(deployer).expect("Withdraw failed");

        assert_eq!(context.network.ledger().get_address_to_amount_funded(funder), U256::ZERO);
        assert_eq!(
            context.network.ledger().events().last(),
            Some(&LedgerEvent::Withdrawn(Withdrawn {
                owner: deployer,
                amount: ether(3),
                funders_cleared: U256::from(3),
            }))
        );
    }

    #[test]
    fn test_second_withdraw_is_a_no_op() {
        let mut context = TestContext::new();
        let deployer = context.deployer();
        context.fund_from_many(2);

        context.network.withdraw(deployer).expect("First withdraw failed");
        let deployer_balance = context.network.balance_of(deployer);

        let withdrawn = context.network.withdraw(deployer).expect("Second withdraw failed");

        assert_eq!(withdrawn, U256::ZERO);
        assert_eq!(context.network.balance_of(deployer), deployer_balance);
        assert_eq!(context.network.ledger_balance(), U256::ZERO);
        assert_eq!(context.network.ledger().get_funder_count(), U256::ZERO);
    }

    #[test]
    fn test_funding_reopens_after_withdraw() {
        let mut context = TestContext::new();
        let deployer = context.deployer();
        let funder = context.funder();

        context.network.fund(funder, ether(1)).expect("Funding failed");
        context.network.cheaper_withdraw(deployer).expect("Withdraw failed");
        context.network.fund(funder, ether(2)).expect("Refunding failed");

        assert_eq!(context.network.ledger().get_address_to_amount_funded(funder), ether(2));
        assert_eq!(context.network.ledger().get_funder(U256::ZERO).unwrap(), funder);
        assert_eq!(context.network.ledger().get_funder_count(), U256::from(1));
    }
}
