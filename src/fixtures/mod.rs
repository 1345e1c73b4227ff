//! Fixtures
//!
//! Loads trolleys from YAML documents laid out as
//! `<base path>/trolleys/<name>.yml`.

use std::{fs, path::PathBuf};

use thiserror::Error;

use crate::{fixtures::trolleys::TrolleyFixture, trolley::Trolley};

pub mod trolleys;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),
}

/// Fixture
#[derive(Debug, Clone)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,
}

impl Fixture {
    /// Create a fixture loader rooted at `./fixtures`
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a fixture loader with a custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Load a trolley from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_trolley(&self, name: &str) -> Result<Trolley, FixtureError> {
        let file_path = self.base_path.join("trolleys").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;

        parse_trolley(&contents)
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a trolley from a YAML document
///
/// # Errors
///
/// Returns an error if the document is not a valid trolley fixture.
pub fn parse_trolley(contents: &str) -> Result<Trolley, FixtureError> {
    let fixture: TrolleyFixture = serde_norway::from_str(contents)?;

    Ok(fixture.into())
}

#[cfg(test)]
mod tests {
    use std::fs::{create_dir_all, write};

    use rust_decimal_macros::dec;
    use testresult::TestResult;

    use crate::{items::Item, offers::Offer, quantities::Quantity};

    use super::*;

    const YAML: &str = r#"
products:
  - name: Product1
    price: 10
  - name: Product2
    price: "20.50"
specials:
  - quantities:
      - name: Product1
        quantity: 1
      - name: Product2
        quantity: 2
    total: "5"
quantities:
  - name: Product1
    quantity: 2
"#;

    #[test]
    fn parse_trolley_reads_all_sections() -> TestResult {
        let trolley = parse_trolley(YAML)?;

        assert_eq!(
            trolley.items(),
            &[
                Item::new("Product1", dec!(10)),
                Item::new("Product2", dec!(20.50)),
            ]
        );
        assert_eq!(
            trolley.offers(),
            &[Offer::new(
                [
                    Quantity::new("Product1", dec!(1)),
                    Quantity::new("Product2", dec!(2)),
                ],
                dec!(5),
            )]
        );
        assert_eq!(trolley.quantities(), &[Quantity::new("Product1", dec!(2))]);

        Ok(())
    }

    #[test]
    fn parse_trolley_defaults_missing_sections() -> TestResult {
        let trolley = parse_trolley("products: []\n")?;

        assert!(trolley.offers().is_empty());
        assert!(trolley.quantities().is_empty());

        Ok(())
    }

    #[test]
    fn parse_trolley_rejects_non_numeric_price() {
        let yaml = r"
products:
  - name: Product1
    price: not a number
";

        assert!(matches!(parse_trolley(yaml), Err(FixtureError::Yaml(_))));
    }

    #[test]
    fn load_trolley_reads_from_base_path() -> TestResult {
        let dir = tempfile::tempdir()?;
        create_dir_all(dir.path().join("trolleys"))?;
        write(dir.path().join("trolleys").join("basic.yml"), YAML)?;

        let trolley = Fixture::with_base_path(dir.path()).load_trolley("basic")?;

        assert_eq!(trolley.items().len(), 2);

        Ok(())
    }

    #[test]
    fn load_trolley_missing_file_is_io_error() -> TestResult {
        let dir = tempfile::tempdir()?;

        let result = Fixture::with_base_path(dir.path()).load_trolley("missing");

        assert!(matches!(result, Err(FixtureError::Io(_))));

        Ok(())
    }
}
