//! Trolley prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    fixtures::{Fixture, FixtureError},
    items::Item,
    offers::{Offer, combine, eligible_offers, is_eligible},
    pricing::{PriceError, price_of, try_price_of},
    quantities::Quantity,
    receipt::{Receipt, ReceiptError, ReceiptLine},
    solvers::{
        CombinationSolver, Solver, SolverResult, best_candidate_combinations, compute_total,
        price_validated,
    },
    trolley::Trolley,
    validation::{ValidationError, ValidationErrors, validate},
};
