//! Combination Solver
//!
//! Prices a trolley by searching for the most profitable way to stack its
//! special offers. The search starts from the identity offer and repeatedly
//! folds in individually eligible offers, in non-decreasing index order so
//! that every multiset of offers is visited once. An offer may be folded in
//! again after itself, which is how a trolley qualifies for the same special
//! several times. Only combinations that no eligible offer can extend are
//! kept as candidates.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::{
    offers::{Offer, combine, eligible_offers, is_eligible},
    pricing::price_of,
    quantities::{Quantity, subtract},
    solvers::{Solver, SolverResult},
    trolley::Trolley,
};

/// Depth-first search over stackable offers
#[derive(Debug, Clone, Copy, Default)]
pub struct CombinationSolver;

impl Solver for CombinationSolver {
    #[tracing::instrument(
        name = "combination_solver.solve",
        skip_all,
        fields(
            offers = trolley.offers().len(),
            eligible = tracing::field::Empty,
            candidates = tracing::field::Empty
        )
    )]
    fn solve(trolley: &Trolley) -> SolverResult {
        let span = tracing::Span::current();
        let subtotal = trolley.subtotal();

        let eligible = eligible_offers(trolley.quantities(), trolley.offers());
        span.record("eligible", eligible.len());

        let candidates = best_candidate_combinations(trolley.quantities(), &eligible);
        span.record("candidates", candidates.len());

        let (savings, combination) = most_profitable(trolley, candidates);

        let leftover = subtract(trolley.quantities(), combination.required());
        let total = price_of(trolley.items(), &leftover) + combination.fixed_price();

        debug!(%subtotal, %total, %savings, "priced trolley");

        SolverResult {
            subtotal,
            total,
            combination,
            savings,
            leftover,
        }
    }
}

/// Maximal eligible combinations of `offers` for a trolley holding
/// `quantities`.
///
/// Each returned offer is eligible and cannot be combined with any further
/// offer from `offers` while staying eligible. Structurally equal
/// combinations are returned once, in depth-first order. With no offers the
/// result is just the identity offer.
///
/// Offers that require nothing are ignored, since they could be stacked
/// without bound.
pub fn best_candidate_combinations(quantities: &[Quantity], offers: &[Offer]) -> Vec<Offer> {
    let offers: Vec<&Offer> = offers
        .iter()
        .enumerate()
        .filter_map(|(index, offer)| {
            if offer.consumes_anything() {
                Some(offer)
            } else {
                warn!(offer_index = index, "ignoring offer that requires nothing");
                None
            }
        })
        .collect();

    let mut candidates: Vec<Offer> = Vec::new();
    let mut stack = vec![(Offer::identity(), 0_usize)];

    while let Some((current, start)) = stack.pop() {
        let extensions: Vec<(Offer, usize)> = offers
            .iter()
            .enumerate()
            .skip(start)
            .map(|(index, offer)| (combine(&current, offer), index))
            .filter(|(combined, _)| is_eligible(quantities, combined))
            .collect();

        if extensions.is_empty() {
            if is_maximal(quantities, &offers, &current, start) && !candidates.contains(&current)
            {
                candidates.push(current);
            }
        } else {
            // Reversed so the lowest index is explored first.
            stack.extend(extensions.into_iter().rev());
        }
    }

    debug!(candidates = candidates.len(), "found maximal combinations");

    candidates
}

/// Whether no offer before `start` can extend `current`.
///
/// Offers from `start` onwards have already been tried by the caller. A
/// combination extendable by an earlier offer is a subset of one reached
/// along another branch.
fn is_maximal(quantities: &[Quantity], offers: &[&Offer], current: &Offer, start: usize) -> bool {
    offers
        .iter()
        .take(start)
        .all(|offer| !is_eligible(quantities, &combine(current, offer)))
}

/// Savings made by `offer` over buying its requirements at full price.
fn savings(trolley: &Trolley, offer: &Offer) -> Decimal {
    price_of(trolley.items(), offer.required()) - offer.fixed_price()
}

/// Picks the candidate with the greatest savings. On a tie the earliest
/// candidate wins.
fn most_profitable(trolley: &Trolley, candidates: Vec<Offer>) -> (Decimal, Offer) {
    candidates
        .into_iter()
        .map(|candidate| (savings(trolley, &candidate), candidate))
        .fold(None, |best: Option<(Decimal, Offer)>, (saved, candidate)| match best {
            Some((best_saved, _)) if best_saved >= saved => best,
            _ => Some((saved, candidate)),
        })
        .unwrap_or_else(|| (Decimal::ZERO, Offer::identity()))
}
