use alloy_sol_types::sol;

sol! {
    #[derive(Debug, PartialEq, Eq)]
    event Funded(
        address indexed funder,
        uint256 amount,
        uint256 total_funded
    );

    #[derive(Debug, PartialEq, Eq)]
    event Withdrawn(
        address indexed owner,
        uint256 amount,
        uint256 funders_cleared
    );
}

/// Host-side copy of an emitted event, kept in emission order.
#[derive(Debug, PartialEq, Eq)]
pub enum LedgerEvent {
    Funded(Funded),
    Withdrawn(Withdrawn),
}
