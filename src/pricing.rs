//! Prices

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    items::{Item, unit_prices},
    quantities::Quantity,
};

/// Full catalogue price of `quantities`.
///
/// Each line is joined to the catalogue by name and priced at
/// `amount * unit_price`. Lines naming an item missing from the catalogue
/// contribute nothing.
pub fn price_of(items: &[Item], quantities: &[Quantity]) -> Decimal {
    let prices = unit_prices(items);

    quantities
        .iter()
        .filter_map(|quantity| {
            prices
                .get(quantity.name())
                .map(|unit_price| quantity.amount() * *unit_price)
        })
        .sum()
}

/// Errors from [`try_price_of`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// A line price or the running total does not fit in a `Decimal`.
    #[error("price of '{name}' is out of range")]
    Overflow {
        /// Item whose line overflowed
        name: String,
    },
}

/// Like [`price_of`], but reports overflow instead of panicking.
///
/// # Errors
///
/// Returns [`PriceError::Overflow`] naming the first line whose price, or
/// whose addition to the running total, is too large for a `Decimal`.
pub fn try_price_of(items: &[Item], quantities: &[Quantity]) -> Result<Decimal, PriceError> {
    let prices = unit_prices(items);

    quantities.iter().try_fold(Decimal::ZERO, |total, quantity| {
        let Some(unit_price) = prices.get(quantity.name()) else {
            return Ok(total);
        };

        quantity
            .amount()
            .checked_mul(*unit_price)
            .and_then(|line| total.checked_add(line))
            .ok_or_else(|| PriceError::Overflow {
                name: quantity.name().to_string(),
            })
    })
}
