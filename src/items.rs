//! Items

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;

/// A catalogue entry: a named product and its unit price.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    name: String,
    unit_price: Decimal,
}

impl Item {
    /// Creates a new item with the given name and unit price
    pub fn new(name: impl Into<String>, unit_price: Decimal) -> Self {
        Self {
            name: name.into(),
            unit_price,
        }
    }

    /// Returns the name of the item
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unit price of the item
    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }
}

/// Builds a name -> unit price lookup for a catalogue.
///
/// If a name occurs more than once the first entry wins, matching the
/// join used by [`crate::pricing::price_of`].
pub fn unit_prices(items: &[Item]) -> FxHashMap<&str, Decimal> {
    let mut prices = FxHashMap::default();

    for item in items {
        prices.entry(item.name()).or_insert(item.unit_price());
    }

    prices
}
