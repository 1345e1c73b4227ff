//! Trolley Fixtures

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{items::Item, offers::Offer, quantities::Quantity, trolley::Trolley};

/// Trolley document in YAML
#[derive(Debug, Deserialize)]
pub struct TrolleyFixture {
    /// Catalogue entries
    #[serde(default)]
    pub products: Vec<ProductFixture>,

    /// Special offers
    #[serde(default)]
    pub specials: Vec<SpecialFixture>,

    /// Quantities held by the shopper
    #[serde(default)]
    pub quantities: Vec<QuantityFixture>,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product name
    pub name: String,

    /// Unit price (e.g. `10` or `"2.99"`)
    pub price: Decimal,
}

/// Special offer fixture
#[derive(Debug, Deserialize)]
pub struct SpecialFixture {
    /// Quantities required by the special
    pub quantities: Vec<QuantityFixture>,

    /// Bundle price
    pub total: Decimal,
}

/// Quantity Fixture
#[derive(Debug, Deserialize)]
pub struct QuantityFixture {
    /// Product name
    pub name: String,

    /// Amount
    pub quantity: Decimal,
}

impl From<ProductFixture> for Item {
    fn from(fixture: ProductFixture) -> Self {
        Item::new(fixture.name, fixture.price)
    }
}

impl From<QuantityFixture> for Quantity {
    fn from(fixture: QuantityFixture) -> Self {
        Quantity::new(fixture.name, fixture.quantity)
    }
}

impl From<SpecialFixture> for Offer {
    fn from(fixture: SpecialFixture) -> Self {
        Offer::new(
            fixture.quantities.into_iter().map(Quantity::from),
            fixture.total,
        )
    }
}

impl From<TrolleyFixture> for Trolley {
    fn from(fixture: TrolleyFixture) -> Self {
        Trolley::new(
            fixture
                .products
                .into_iter()
                .map(Item::from)
                .collect::<Vec<_>>(),
            fixture
                .specials
                .into_iter()
                .map(Offer::from)
                .collect::<Vec<_>>(),
            fixture
                .quantities
                .into_iter()
                .map(Quantity::from)
                .collect::<Vec<_>>(),
        )
    }
}
