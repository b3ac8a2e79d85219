pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{toml_config::TomlConfig, OutputFormat};
pub use core::{calculator::FuelSavingsCalculator, math::MathService};
pub use domain::model::{SavingsInput, SavingsReport, Timeframe};
pub use domain::ports::InputSource;
pub use utils::error::{Result, SavingsError};
