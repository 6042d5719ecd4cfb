use alloy_primitives::U256;

use crate::types::{
    errors::{overflow, oracle_failure, Result},
    native_unit, pow10, RoundData, MAX_FEED_DECIMALS, MINIMUM_USD, NATIVE_DECIMALS,
};

/// Read access to an external price feed quoting the native currency in USD.
///
/// The on-chain contract implements this over a cross-contract static call;
/// hosts and tests inject an in-memory feed instead.
pub trait PriceSource {
    fn decimals(&self) -> Result<u8>;

    fn latest_round(&self) -> Result<RoundData>;
}

/// Latest USD price of one native unit, scaled to 18 decimals.
///
/// Fails on a non-positive answer, an incomplete or stale round, or a feed
/// whose decimals cannot be normalised.
pub fn latest_price<P: PriceSource + ?Sized>(source: &P) -> Result<U256> {
    let decimals = source.decimals()?;
    if decimals > MAX_FEED_DECIMALS {
        return Err(oracle_failure("feed reports too many decimals"));
    }

    let round = source.latest_round()?;
    if !round.answer.is_positive() {
        return Err(oracle_failure("feed answer is not positive"));
    }
    if round.updated_at.is_zero() {
        return Err(oracle_failure("feed round is incomplete"));
    }
    if round.answered_in_round < round.round_id {
        return Err(oracle_failure("feed answer is stale"));
    }

    let raw = round.answer.into_raw();
    let price = if decimals <= NATIVE_DECIMALS {
        raw.checked_mul(pow10(NATIVE_DECIMALS - decimals))
            .ok_or_else(overflow)?
    } else {
        raw / pow10(decimals - NATIVE_DECIMALS)
    };

    if price.is_zero() {
        return Err(oracle_failure("feed price rounds to zero"));
    }
    Ok(price)
}

/// Native smallest units worth `usd_amount` (USD, 18 decimals), rounded up.
///
/// Rounding up keeps `amount >= usd_to_native(x)` equivalent to "amount is
/// worth at least x".
pub fn usd_to_native<P: PriceSource + ?Sized>(source: &P, usd_amount: U256) -> Result<U256> {
    let price = latest_price(source)?;
    let numerator = usd_amount.checked_mul(native_unit()).ok_or_else(overflow)?;
    let (quotient, remainder) = numerator.div_rem(price);
    if remainder.is_zero() {
        Ok(quotient)
    } else {
        Ok(quotient + U256::from(1))
    }
}

/// USD value (18 decimals) of `native_amount` smallest units, rounded down.
pub fn get_conversion_rate<P: PriceSource + ?Sized>(source: &P, native_amount: U256) -> Result<U256> {
    let price = latest_price(source)?;
    let product = price.checked_mul(native_amount).ok_or_else(overflow)?;
    Ok(product / native_unit())
}

/// Smallest contribution, in wei, currently worth the USD minimum.
pub fn minimum_contribution<P: PriceSource + ?Sized>(source: &P) -> Result<U256> {
    usd_to_native(source, MINIMUM_USD)
}
