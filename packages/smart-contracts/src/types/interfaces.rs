use alloy_sol_types::sol;
#[cfg(any(target_arch = "wasm32", feature = "export-abi"))]
use stylus_sdk::prelude::*;

// Price feed read by the on-chain contract.
#[cfg(any(target_arch = "wasm32", feature = "export-abi"))]
sol_interface! {
    interface AggregatorV3Interface {
        function decimals() external view returns (uint8);
        function latestRoundData() external view returns (uint80, int256, uint256, uint256, uint80);
    }
}

// Stylus exports `#[public]` methods under their camelCase names, so these
// selectors match the deployed FundMe contract.
sol! {
    interface IFundMe {
        function initialize(address price_feed) external;
        function fund() external payable;
        function withdraw() external;
        function cheaperWithdraw() external;
        function getOwner() external view returns (address);
        function getPriceFeed() external view returns (address);
        function getFunder(uint256 index) external view returns (address);
        function getFunderCount() external view returns (uint256);
        function getAddressToAmountFunded(address funder) external view returns (uint256);
        function getMinimumContribution() external view returns (uint256);
        function getConversionRate(uint256 native_amount) external view returns (uint256);
    }
}

/// Signature and selector of every public FundMe function.
pub fn fund_me_selectors() -> Vec<(&'static str, [u8; 4])> {
    use alloy_sol_types::SolCall;
    use IFundMe::*;

    vec![
        (initializeCall::SIGNATURE, initializeCall::SELECTOR),
        (fundCall::SIGNATURE, fundCall::SELECTOR),
        (withdrawCall::SIGNATURE, withdrawCall::SELECTOR),
        (cheaperWithdrawCall::SIGNATURE, cheaperWithdrawCall::SELECTOR),
        (getOwnerCall::SIGNATURE, getOwnerCall::SELECTOR),
        (getPriceFeedCall::SIGNATURE, getPriceFeedCall::SELECTOR),
        (getFunderCall::SIGNATURE, getFunderCall::SELECTOR),
        (getFunderCountCall::SIGNATURE, getFunderCountCall::SELECTOR),
        (getAddressToAmountFundedCall::SIGNATURE, getAddressToAmountFundedCall::SELECTOR),
        (getMinimumContributionCall::SIGNATURE, getMinimumContributionCall::SELECTOR),
        (getConversionRateCall::SIGNATURE, getConversionRateCall::SELECTOR),
    ]
}
