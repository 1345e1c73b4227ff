//! Integration tests for trolley totals through the combination solver.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use testresult::TestResult;

use trolley::{
    fixtures::Fixture,
    items::Item,
    offers::Offer,
    quantities::Quantity,
    solvers::{CombinationSolver, Solver, compute_total, price_validated},
    trolley::Trolley,
};

fn fixture() -> Fixture {
    Fixture::with_base_path(concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures"))
}

fn catalogue() -> [Item; 2] {
    [
        Item::new("Product1", dec!(10)),
        Item::new("Product2", dec!(20)),
    ]
}

fn bundle() -> Offer {
    Offer::new(
        [
            Quantity::new("Product1", dec!(1)),
            Quantity::new("Product2", dec!(2)),
        ],
        dec!(5),
    )
}

fn holding(product1: Decimal, product2: Decimal) -> Trolley {
    Trolley::new(
        catalogue(),
        [bundle()],
        [
            Quantity::new("Product1", product1),
            Quantity::new("Product2", product2),
        ],
    )
}

#[test]
fn offer_not_applied_when_any_quantity_is_short() {
    assert_eq!(compute_total(&holding(dec!(1), dec!(1))), dec!(30));
}

#[test]
fn offer_applied_when_quantities_are_met() {
    assert_eq!(compute_total(&holding(dec!(2), dec!(2))), dec!(15));
}

#[test]
fn offer_applied_repeatedly_when_trolley_qualifies_more_than_once() {
    assert_eq!(compute_total(&holding(dec!(2), dec!(4))), dec!(10));
}

#[test]
fn best_offer_combination_is_applied() {
    let three_for_five = Offer::new([Quantity::new("Product1", dec!(3))], dec!(5));
    let six_for_nine = Offer::new([Quantity::new("Product1", dec!(6))], dec!(9));
    let eight_for_nine_fifty = Offer::new([Quantity::new("Product1", dec!(8))], dec!(9.5));
    let quantities = [Quantity::new("Product1", dec!(10))];
    let items = [Item::new("Product1", dec!(10))];

    let all = Trolley::new(
        items.clone(),
        [
            three_for_five.clone(),
            six_for_nine,
            eight_for_nine_fifty.clone(),
        ],
        quantities.clone(),
    );
    let eight_only = Trolley::new(items.clone(), [eight_for_nine_fifty], quantities.clone());
    let three_only = Trolley::new(items, [three_for_five], quantities);

    assert_eq!(compute_total(&all), dec!(24));
    assert_eq!(compute_total(&eight_only), dec!(29.5));
    assert_eq!(compute_total(&three_only), dec!(25));
}

#[test]
fn empty_trolley_costs_nothing() {
    assert_eq!(compute_total(&Trolley::default()), Decimal::ZERO);
    assert_eq!(
        compute_total(&Trolley::new(catalogue(), [bundle()], Vec::new())),
        Decimal::ZERO
    );
}

#[test]
fn no_offers_prices_everything_in_full() {
    let trolley = Trolley::new(
        catalogue(),
        Vec::new(),
        [
            Quantity::new("Product1", dec!(3)),
            Quantity::new("Product2", dec!(0.5)),
        ],
    );

    let result = CombinationSolver::solve(&trolley);

    assert_eq!(result.total, dec!(40));
    assert_eq!(result.total, result.subtotal);
    assert!(result.combination.is_identity());
    assert_eq!(result.savings, Decimal::ZERO);
}

#[test]
fn fixtures_match_expected_totals() -> TestResult {
    let expected = [
        ("short", dec!(30)),
        ("single", dec!(15)),
        ("repeated", dec!(10)),
        ("stacked", dec!(24)),
        ("grocery", dec!(16.00)),
    ];

    for (name, total) in expected {
        let trolley = fixture().load_trolley(name)?;

        assert_eq!(price_validated(&trolley)?, total, "fixture {name}");
    }

    Ok(())
}

#[test]
fn grocery_fixture_prefers_the_bread_and_milk_bundle() -> TestResult {
    let trolley = fixture().load_trolley("grocery")?;

    let result = CombinationSolver::solve(&trolley);

    // Milk x3, apples 1.5kg and bread x2 + milk beats bread + butter.
    assert_eq!(result.subtotal, dec!(18.25));
    assert_eq!(result.savings, dec!(2.25));
    assert_eq!(result.combination.fixed_price(), dec!(11.75));
    assert_eq!(
        result.leftover,
        vec![
            Quantity::new("Apples (kg)", dec!(0.75)),
            Quantity::new("Bread", dec!(0)),
            Quantity::new("Butter", dec!(1)),
            Quantity::new("Milk", dec!(0)),
        ]
    );

    Ok(())
}
