//! Trolley validation
//!
//! The pricing engine assumes a well-formed trolley. [`validate`] checks the
//! rules it relies on and reports every violation it finds.

use std::slice;

use rust_decimal::Decimal;
use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::{
    items::{Item, unit_prices},
    offers::Offer,
    pricing::{PriceError, try_price_of},
    quantities::Quantity,
    trolley::Trolley,
};

/// A single broken trolley rule.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Two catalogue items share a name.
    #[error("item name '{name}' is not unique")]
    DuplicateItem {
        /// Repeated item name
        name: String,
    },

    /// An item's unit price is zero or negative.
    #[error("item '{name}' has price {price}, which must be greater than 0")]
    NonPositivePrice {
        /// Item name
        name: String,
        /// Offending price
        price: Decimal,
    },

    /// Two trolley quantity lines share a name.
    #[error("quantity name '{name}' is not unique")]
    DuplicateQuantity {
        /// Repeated item name
        name: String,
    },

    /// A trolley quantity is negative.
    #[error("quantity of '{name}' must be greater than or equal to 0")]
    NegativeQuantity {
        /// Item name
        name: String,
    },

    /// A trolley quantity names an item missing from the catalogue.
    #[error("quantity name '{name}' must be one of the item names")]
    UnknownItem {
        /// Unknown item name
        name: String,
    },

    /// A trolley quantity is too large for its offers to be priced exactly.
    #[error("quantity of '{name}' is too large to price")]
    AmountOutOfRange {
        /// Item name
        name: String,
    },

    /// Two quantity lines of one offer share a name.
    #[error("offer {offer}: quantity name '{name}' is not unique")]
    DuplicateOfferQuantity {
        /// Offer index
        offer: usize,
        /// Repeated item name
        name: String,
    },

    /// An offer requires a negative quantity.
    #[error("offer {offer}: quantity of '{name}' must be greater than or equal to 0")]
    NegativeOfferQuantity {
        /// Offer index
        offer: usize,
        /// Item name
        name: String,
    },

    /// An offer names an item missing from the catalogue.
    #[error("offer {offer}: quantity name '{name}' must be one of the item names")]
    UnknownOfferItem {
        /// Offer index
        offer: usize,
        /// Unknown item name
        name: String,
    },

    /// The full price of an offer's quantities is too large to represent.
    #[error("offer {offer}: price of '{name}' is too large to represent")]
    OfferAmountOutOfRange {
        /// Offer index
        offer: usize,
        /// Item whose line overflowed
        name: String,
    },

    /// An offer's fixed price is zero or negative.
    #[error("offer {offer}: total {price} must be greater than 0")]
    NonPositiveOfferPrice {
        /// Offer index
        offer: usize,
        /// Offending price
        price: Decimal,
    },

    /// An offer is not cheaper than buying its items at full price.
    #[error("offer {offer}: total {fixed_price} must be cheaper than full price {full_price}")]
    UnprofitableOffer {
        /// Offer index
        offer: usize,
        /// Offer total
        fixed_price: Decimal,
        /// Full price of the offer's quantities
        full_price: Decimal,
    },
}

/// Every rule a trolley breaks.
#[derive(Debug, Error, Clone, Default, PartialEq, Eq)]
#[error("trolley is invalid{}", format_violations(.0))]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    /// Number of violations.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no violations.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the violations in the order they were found.
    pub fn iter(&self) -> slice::Iter<'_, ValidationError> {
        self.0.iter()
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

fn format_violations(errors: &[ValidationError]) -> String {
    errors.iter().map(|error| format!("; {error}")).collect()
}

/// Check a trolley against the rules the pricing engine depends on.
///
/// # Errors
///
/// Returns [`ValidationErrors`] with one entry per violation if any rule is
/// broken.
pub fn validate(trolley: &Trolley) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();

    check_items(trolley.items(), &mut errors);
    check_quantities(trolley.items(), trolley.quantities(), &mut errors);

    for (index, offer) in trolley.offers().iter().enumerate() {
        check_offer(trolley.items(), index, offer, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}

fn check_items(items: &[Item], errors: &mut Vec<ValidationError>) {
    let mut seen = FxHashSet::default();

    for item in items {
        if !seen.insert(item.name()) {
            errors.push(ValidationError::DuplicateItem {
                name: item.name().to_string(),
            });
        }

        if item.unit_price() <= Decimal::ZERO {
            errors.push(ValidationError::NonPositivePrice {
                name: item.name().to_string(),
                price: item.unit_price(),
            });
        }
    }
}

fn check_quantities(items: &[Item], quantities: &[Quantity], errors: &mut Vec<ValidationError>) {
    let prices = unit_prices(items);
    let mut seen = FxHashSet::default();

    // Combining two eligible offers can sum up to twice each held amount and
    // twice the trolley's full price, so both must stay representable.
    let mut doubled_subtotal = Some(Decimal::ZERO);

    for quantity in quantities {
        let name = quantity.name().to_string();

        if !seen.insert(quantity.name()) {
            errors.push(ValidationError::DuplicateQuantity { name: name.clone() });
        }

        if !is_known(items, quantity.name()) {
            errors.push(ValidationError::UnknownItem { name: name.clone() });
        }

        let was_in_range = doubled_subtotal.is_some();

        doubled_subtotal = doubled_subtotal
            .zip(quantity.amount().checked_mul(Decimal::TWO))
            .and_then(|(subtotal, doubled)| {
                let line = match prices.get(quantity.name()) {
                    Some(unit_price) => doubled.checked_mul(*unit_price)?,
                    None => Decimal::ZERO,
                };

                subtotal.checked_add(line)
            });

        if was_in_range && doubled_subtotal.is_none() {
            errors.push(ValidationError::AmountOutOfRange { name: name.clone() });
        }

        if quantity.amount() < Decimal::ZERO {
            errors.push(ValidationError::NegativeQuantity { name });
        }
    }
}

fn check_offer(
    items: &[Item],
    offer_index: usize,
    offer: &Offer,
    errors: &mut Vec<ValidationError>,
) {
    let mut seen = FxHashSet::default();

    for quantity in offer.required() {
        let name = quantity.name().to_string();

        if !seen.insert(quantity.name()) {
            errors.push(ValidationError::DuplicateOfferQuantity {
                offer: offer_index,
                name: name.clone(),
            });
        }

        if !is_known(items, quantity.name()) {
            errors.push(ValidationError::UnknownOfferItem {
                offer: offer_index,
                name: name.clone(),
            });
        }

        if quantity.amount() < Decimal::ZERO {
            errors.push(ValidationError::NegativeOfferQuantity {
                offer: offer_index,
                name,
            });
        }
    }

    if offer.fixed_price() <= Decimal::ZERO {
        errors.push(ValidationError::NonPositiveOfferPrice {
            offer: offer_index,
            price: offer.fixed_price(),
        });
    }

    match try_price_of(items, offer.required()) {
        Ok(full_price) if offer.fixed_price() >= full_price => {
            errors.push(ValidationError::UnprofitableOffer {
                offer: offer_index,
                fixed_price: offer.fixed_price(),
                full_price,
            });
        }
        Ok(_) => {}
        Err(PriceError::Overflow { name }) => {
            errors.push(ValidationError::OfferAmountOutOfRange {
                offer: offer_index,
                name,
            });
        }
    }
}

fn is_known(items: &[Item], name: &str) -> bool {
    items.iter().any(|item| item.name() == name)
}
