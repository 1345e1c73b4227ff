//! Offer eligibility

use crate::{
    offers::Offer,
    quantities::{Quantity, amount_of},
};

/// Whether a trolley holding `quantities` can satisfy every line of `offer`.
///
/// An offer with no required lines is always eligible.
pub fn is_eligible(quantities: &[Quantity], offer: &Offer) -> bool {
    offer.required().iter().all(|required| {
        amount_of(quantities, required.name()).is_some_and(|held| held >= required.amount())
    })
}

/// Offers that are individually eligible against `quantities`, in the order
/// given.
pub fn eligible_offers(quantities: &[Quantity], offers: &[Offer]) -> Vec<Offer> {
    offers
        .iter()
        .filter(|offer| is_eligible(quantities, offer))
        .cloned()
        .collect()
}
