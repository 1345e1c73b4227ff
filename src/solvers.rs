//! Solvers for Trolleys

use rust_decimal::Decimal;

use crate::{
    offers::Offer,
    quantities::Quantity,
    trolley::Trolley,
    validation::{ValidationErrors, validate},
};

pub mod combination;

pub use combination::{CombinationSolver, best_candidate_combinations};

/// Result of pricing a trolley
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverResult {
    /// Price of the trolley with no offers applied
    pub subtotal: Decimal,

    /// Amount payable after applying the chosen offer combination
    pub total: Decimal,

    /// Offer combination that was applied (the identity offer if none)
    pub combination: Offer,

    /// Full price of the combination's requirements minus its fixed price
    pub savings: Decimal,

    /// Trolley quantities not covered by the combination, priced at full price
    pub leftover: Vec<Quantity>,
}

/// Trait for pricing a trolley against its special offers
pub trait Solver {
    /// Price the trolley.
    ///
    /// The trolley is expected to have passed [`validate`]; results for an
    /// invalid trolley are unspecified.
    fn solve(trolley: &Trolley) -> SolverResult;
}

/// Minimum payable total for an already validated trolley.
pub fn compute_total(trolley: &Trolley) -> Decimal {
    CombinationSolver::solve(trolley).total
}

/// Validate the trolley, then compute its total.
///
/// # Errors
///
/// Returns [`ValidationErrors`] listing every rule the trolley breaks.
pub fn price_validated(trolley: &Trolley) -> Result<Decimal, ValidationErrors> {
    validate(trolley)?;

    Ok(compute_total(trolley))
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::{items::Item, validation::ValidationError};

    use super::*;

    #[test]
    fn price_validated_prices_valid_trolley() -> Result<(), ValidationErrors> {
        let trolley = Trolley::new(
            [Item::new("Product1", dec!(10))],
            [Offer::new([Quantity::new("Product1", dec!(3))], dec!(5))],
            [Quantity::new("Product1", dec!(4))],
        );

        assert_eq!(price_validated(&trolley)?, dec!(15));

        Ok(())
    }

    #[test]
    fn price_validated_rejects_invalid_trolley() {
        let trolley = Trolley::new(
            [Item::new("Product1", dec!(10))],
            Vec::new(),
            [Quantity::new("Product1", dec!(-1))],
        );

        let errors = price_validated(&trolley).err().unwrap_or_default();

        assert_eq!(
            errors.iter().collect::<Vec<_>>(),
            vec![&ValidationError::NegativeQuantity {
                name: "Product1".to_string(),
            }]
        );
    }

    #[test]
    fn price_validated_rejects_trolley_too_large_to_price() {
        let trolley = Trolley::new(
            [Item::new("Product1", dec!(100000000000000000000))],
            Vec::new(),
            [Quantity::new("Product1", dec!(1000000000))],
        );

        let errors = price_validated(&trolley).err().unwrap_or_default();

        assert_eq!(
            errors.iter().collect::<Vec<_>>(),
            vec![&ValidationError::AmountOutOfRange {
                name: "Product1".to_string(),
            }]
        );
    }
}
