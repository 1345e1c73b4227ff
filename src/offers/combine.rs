//! Offer combination

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::{offers::Offer, quantities::Quantity};

/// Merge two offers into one that requires both sets of quantities and
/// charges both prices.
///
/// Amounts for the same item name are summed. The resulting lines are
/// ordered by name, so combining the same offers in any order produces an
/// equal value.
pub fn combine(a: &Offer, b: &Offer) -> Offer {
    let mut totals: BTreeMap<&str, Decimal> = BTreeMap::new();

    for quantity in a.required().iter().chain(b.required()) {
        *totals.entry(quantity.name()).or_insert(Decimal::ZERO) += quantity.amount();
    }

    Offer::new(
        totals
            .into_iter()
            .map(|(name, amount)| Quantity::new(name, amount)),
        a.fixed_price() + b.fixed_price(),
    )
}
