//! Trolley
//!
//! Trolley prices a shopping trolley against a catalogue and a set of
//! bundled special offers, finding the combination of offers that leaves the
//! shopper paying the least.
//!
//! ```
//! use rust_decimal::Decimal;
//! use trolley::prelude::*;
//!
//! let trolley = Trolley::new(
//!     [Item::new("Product1", Decimal::from(10))],
//!     [Offer::new([Quantity::new("Product1", Decimal::from(3))], Decimal::from(5))],
//!     [Quantity::new("Product1", Decimal::from(4))],
//! );
//!
//! assert_eq!(compute_total(&trolley), Decimal::from(15));
//! ```

pub mod fixtures;
pub mod items;
pub mod logging;
pub mod offers;
pub mod prelude;
pub mod pricing;
pub mod quantities;
pub mod receipt;
pub mod solvers;
pub mod trolley;
pub mod utils;
pub mod validation;
