pub mod mock_aggregator;
pub mod price_converter;

pub use mock_aggregator::MockV3Aggregator;
pub use price_converter::{
    get_conversion_rate, latest_price, minimum_contribution, usd_to_native, PriceSource,
};
