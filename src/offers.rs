//! Offers
//!
//! A special offer sells a required multiset of items for a fixed bundle
//! price. Offers can be merged with [`combine`] to ask whether a trolley
//! qualifies for several of them at once, and tested against a trolley with
//! [`is_eligible`].

use rust_decimal::Decimal;
use smallvec::SmallVec;

use crate::quantities::Quantity;

pub mod combine;
pub mod eligibility;

pub use combine::combine;
pub use eligibility::{eligible_offers, is_eligible};

/// Required quantity lines of an offer. Most offers name a handful of items.
pub type RequiredQuantities = SmallVec<[Quantity; 4]>;

/// A bundle price for a set of required quantities.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Offer {
    required: RequiredQuantities,
    fixed_price: Decimal,
}

impl Offer {
    /// Create a new offer.
    pub fn new(required: impl IntoIterator<Item = Quantity>, fixed_price: Decimal) -> Self {
        Self {
            required: required.into_iter().collect(),
            fixed_price,
        }
    }

    /// The offer with no requirements and no price.
    ///
    /// Combining any offer with the identity yields the same value back.
    pub fn identity() -> Self {
        Self {
            required: SmallVec::new(),
            fixed_price: Decimal::ZERO,
        }
    }

    /// Quantities a trolley must hold for the offer to apply.
    pub fn required(&self) -> &[Quantity] {
        &self.required
    }

    /// Total charged for the required quantities.
    pub fn fixed_price(&self) -> Decimal {
        self.fixed_price
    }

    /// Whether the offer has no required lines.
    pub fn is_identity(&self) -> bool {
        self.required.is_empty()
    }

    /// Whether applying the offer uses up any part of a trolley.
    pub fn consumes_anything(&self) -> bool {
        self.required
            .iter()
            .any(|quantity| quantity.amount() > Decimal::ZERO)
    }
}

impl Default for Offer {
    fn default() -> Self {
        Self::identity()
    }
}
