//! Utils

use std::path::PathBuf;

use clap::Parser;

use crate::logging::LoggingConfig;

/// Arguments for the trolley demo
#[derive(Debug, Parser)]
#[command(name = "trolley", about = "Price a trolley fixture", long_about = None)]
pub struct DemoTrolleyArgs {
    /// Fixture to price, from `<fixtures-dir>/trolleys/<name>.yml`
    #[arg(short, long, default_value = "stacked")]
    pub fixture: String,

    /// Directory holding the fixture sets
    #[arg(long, default_value = "./fixtures")]
    pub fixtures_dir: PathBuf,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,
}
