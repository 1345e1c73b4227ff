//! Trolley

use rust_decimal::Decimal;

use crate::{items::Item, offers::Offer, pricing::price_of, quantities::Quantity};

/// Everything needed to price one shop: catalogue, offers and quantities held.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Trolley {
    items: Vec<Item>,
    offers: Vec<Offer>,
    quantities: Vec<Quantity>,
}

impl Trolley {
    /// Create a new trolley.
    pub fn new(
        items: impl Into<Vec<Item>>,
        offers: impl Into<Vec<Offer>>,
        quantities: impl Into<Vec<Quantity>>,
    ) -> Self {
        Self {
            items: items.into(),
            offers: offers.into(),
            quantities: quantities.into(),
        }
    }

    /// Catalogue items.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Special offers available to this trolley.
    pub fn offers(&self) -> &[Offer] {
        &self.offers
    }

    /// Quantities the shopper holds.
    pub fn quantities(&self) -> &[Quantity] {
        &self.quantities
    }

    /// Price of the trolley with no offers applied.
    pub fn subtotal(&self) -> Decimal {
        price_of(&self.items, &self.quantities)
    }
}
