//! Quantities

use rust_decimal::Decimal;

/// An amount of a named catalogue item.
///
/// Used both for what a shopper holds and for what an offer requires.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Quantity {
    name: String,
    amount: Decimal,
}

impl Quantity {
    /// Creates a new quantity line
    pub fn new(name: impl Into<String>, amount: Decimal) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }

    /// Item name this quantity refers to
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Amount held or required
    pub fn amount(&self) -> Decimal {
        self.amount
    }
}

/// Returns the amount held for `name`, if the quantities mention it.
pub fn amount_of(quantities: &[Quantity], name: &str) -> Option<Decimal> {
    quantities
        .iter()
        .find(|quantity| quantity.name() == name)
        .map(Quantity::amount)
}

/// Subtracts `consumed` from `held`, name by name.
///
/// Lines in `held` with no counterpart in `consumed` are returned unchanged,
/// and the order of `held` is preserved. Lines only present in `consumed`
/// are ignored.
pub fn subtract(held: &[Quantity], consumed: &[Quantity]) -> Vec<Quantity> {
    held.iter()
        .map(|quantity| {
            let used = amount_of(consumed, quantity.name()).unwrap_or(Decimal::ZERO);

            Quantity::new(quantity.name(), quantity.amount() - used)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn amount_of_finds_named_line() {
        let quantities = [
            Quantity::new("Product1", dec!(2)),
            Quantity::new("Product2", dec!(4)),
        ];

        assert_eq!(amount_of(&quantities, "Product2"), Some(dec!(4)));
        assert_eq!(amount_of(&quantities, "Product3"), None);
    }

    #[test]
    fn subtract_removes_consumed_amounts() {
        let held = [
            Quantity::new("Product1", dec!(2)),
            Quantity::new("Product2", dec!(2)),
        ];
        let consumed = [
            Quantity::new("Product1", dec!(1)),
            Quantity::new("Product2", dec!(2)),
        ];

        assert_eq!(
            subtract(&held, &consumed),
            vec![
                Quantity::new("Product1", dec!(1)),
                Quantity::new("Product2", dec!(0)),
            ]
        );
    }

    #[test]
    fn subtract_leaves_unmentioned_lines_alone() {
        let held = [
            Quantity::new("Product1", dec!(2.5)),
            Quantity::new("Product2", dec!(7)),
        ];
        let consumed = [
            Quantity::new("Product2", dec!(3)),
            Quantity::new("Product9", dec!(1)),
        ];

        assert_eq!(
            subtract(&held, &consumed),
            vec![
                Quantity::new("Product1", dec!(2.5)),
                Quantity::new("Product2", dec!(4)),
            ]
        );
    }
}
