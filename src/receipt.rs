//! Receipt

use std::io;

use rust_decimal::Decimal;
use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{
        Alignment, Color, Style, Theme,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{items::unit_prices, quantities::Quantity, solvers::SolverResult, trolley::Trolley};

/// Errors that can occur when writing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// Writing to the output failed.
    #[error("failed to write receipt: {0}")]
    Io(#[from] io::Error),
}

/// A priced quantity of one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptLine {
    /// Item name
    pub name: String,

    /// Amount of the item
    pub quantity: Decimal,

    /// Catalogue price of one unit
    pub unit_price: Decimal,

    /// `quantity * unit_price`
    pub full_price: Decimal,
}

impl ReceiptLine {
    fn priced(quantity: &Quantity, unit_price: Decimal) -> Self {
        Self {
            name: quantity.name().to_string(),
            quantity: quantity.amount(),
            unit_price,
            full_price: quantity.amount() * unit_price,
        }
    }
}

/// Final receipt for a priced trolley.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    /// Lines covered by the applied specials, at their full price
    special_lines: Vec<ReceiptLine>,

    /// Price charged for the applied specials
    special_price: Decimal,

    /// Lines bought at full price
    full_price_lines: Vec<ReceiptLine>,

    /// Total cost before any specials
    subtotal: Decimal,

    /// Total amount paid
    total: Decimal,
}

impl Receipt {
    /// Build a receipt from a solver result for the given trolley.
    pub fn from_solver_result(trolley: &Trolley, result: SolverResult) -> Self {
        let SolverResult {
            subtotal,
            total,
            combination,
            leftover,
            ..
        } = result;
        let prices = unit_prices(trolley.items());

        let priced = |quantities: &[Quantity]| -> Vec<ReceiptLine> {
            quantities
                .iter()
                .filter(|quantity| !quantity.amount().is_zero())
                .filter_map(|quantity| {
                    prices
                        .get(quantity.name())
                        .map(|unit_price| ReceiptLine::priced(quantity, *unit_price))
                })
                .collect()
        };

        Self {
            special_lines: priced(combination.required()),
            special_price: combination.fixed_price(),
            full_price_lines: priced(&leftover),
            subtotal,
            total,
        }
    }

    /// Lines covered by the applied specials
    pub fn special_lines(&self) -> &[ReceiptLine] {
        &self.special_lines
    }

    /// Price charged for the applied specials
    pub fn special_price(&self) -> Decimal {
        self.special_price
    }

    /// Lines bought at full price
    pub fn full_price_lines(&self) -> &[ReceiptLine] {
        &self.full_price_lines
    }

    /// Total cost before any specials
    pub fn subtotal(&self) -> Decimal {
        self.subtotal
    }

    /// Total amount paid
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Amount saved by the applied specials.
    pub fn savings(&self) -> Decimal {
        self.subtotal - self.total
    }

    /// Savings as a percentage of the subtotal, or `None` for an empty
    /// trolley.
    pub fn savings_percent(&self) -> Option<Decimal> {
        if self.subtotal.is_zero() {
            return None;
        }

        self.savings()
            .checked_mul(Decimal::ONE_HUNDRED)?
            .checked_div(self.subtotal)
    }

    /// Writes the receipt as a table followed by a summary.
    ///
    /// # Errors
    ///
    /// Returns an error if the receipt cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        let mut builder = Builder::default();

        builder.push_record(["Item", "Quantity", "Unit Price", "Price", ""]);

        for line in &self.special_lines {
            builder.push_record(line_cells(line, "special"));
        }

        let special_rows = self.special_lines.len();

        if special_rows > 0 {
            builder.push_record([
                "Specials".to_string(),
                String::new(),
                String::new(),
                money(self.special_price),
                "bundle price".to_string(),
            ]);
        }

        for line in &self.full_price_lines {
            builder.push_record(line_cells(line, "full price"));
        }

        let mut table = builder.build();
        let mut theme = Theme::from(Style::modern_rounded());
        let separator = HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤'));

        theme.remove_horizontal_lines();
        theme.insert_horizontal_line(1, separator);

        if special_rows > 0 && !self.full_price_lines.is_empty() {
            theme.insert_horizontal_line(special_rows + 2, separator);
        }

        table.with(theme);
        table.modify(Rows::first(), Color::BOLD);
        table.modify(Columns::new(1..4), Alignment::right());

        writeln!(out, "\n{table}")?;

        writeln!(out, " Subtotal: {:>12}", money(self.subtotal))?;
        writeln!(out, " Total:    {:>12}", money(self.total))?;

        match self.savings_percent() {
            Some(percent) => writeln!(
                out,
                " Savings:  {:>12} ({:.2}%)",
                money(self.savings()),
                percent
            )?,
            None => writeln!(out, " Savings:  {:>12}", money(self.savings()))?,
        }

        Ok(())
    }
}

fn line_cells(line: &ReceiptLine, source: &str) -> [String; 5] {
    [
        line.name.clone(),
        line.quantity.normalize().to_string(),
        money(line.unit_price),
        money(line.full_price),
        source.to_string(),
    ]
}

fn money(amount: Decimal) -> String {
    format!("{amount:.2}")
}
