pub mod toml_config;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(feature = "cli")]
pub use cli_config::CliConfig;

#[cfg(feature = "cli")]
mod cli_config {
    use super::toml_config::TomlConfig;
    use super::OutputFormat;
    use crate::domain::model::SavingsInput;
    use crate::domain::ports::InputSource;
    use crate::utils::error::Result;
    use clap::Parser;

    #[derive(Debug, Clone, Default, Parser)]
    #[command(name = "fuel-savings")]
    #[command(about = "Projected monthly fuel savings of switching vehicles")]
    pub struct CliConfig {
        /// Miles driven during the chosen timeframe
        #[arg(long)]
        pub miles_driven: Option<f64>,

        /// Timeframe of --miles-driven: week, month or year
        #[arg(long)]
        pub timeframe: Option<String>,

        /// Fuel price of the vehicle being traded in
        #[arg(long)]
        pub trade_ppg: Option<f64>,

        /// Fuel economy of the vehicle being traded in
        #[arg(long)]
        pub trade_mpg: Option<f64>,

        /// Fuel price of the new vehicle
        #[arg(long)]
        pub new_ppg: Option<f64>,

        /// Fuel economy of the new vehicle
        #[arg(long)]
        pub new_mpg: Option<f64>,

        /// TOML file to read inputs from; flags given here override it
        #[arg(short, long)]
        pub config: Option<String>,

        #[arg(long, value_enum)]
        pub format: Option<OutputFormat>,

        /// Emit logs as JSON lines
        #[arg(long)]
        pub log_json: bool,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,
    }

    impl CliConfig {
        /// The configuration file merged with any flags given on the command line.
        pub fn effective_config(&self) -> Result<TomlConfig> {
            let mut config = match &self.config {
                Some(path) => {
                    tracing::info!("📁 Loading configuration from: {}", path);
                    TomlConfig::from_file(path)?
                }
                None => TomlConfig::default(),
            };
            self.apply_overrides(&mut config);
            Ok(config)
        }

        pub fn apply_overrides(&self, config: &mut TomlConfig) {
            if self.miles_driven.is_some() {
                config.driving.miles_driven = self.miles_driven;
            }
            if self.timeframe.is_some() {
                config.driving.timeframe = self.timeframe.clone();
            }
            if self.trade_ppg.is_some() {
                config.trade.ppg = self.trade_ppg;
            }
            if self.trade_mpg.is_some() {
                config.trade.mpg = self.trade_mpg;
            }
            if self.new_ppg.is_some() {
                config.new.ppg = self.new_ppg;
            }
            if self.new_mpg.is_some() {
                config.new.mpg = self.new_mpg;
            }
        }

        pub fn output_format(&self, config: &TomlConfig) -> OutputFormat {
            self.format.or(config.output_format()).unwrap_or_default()
        }
    }

    impl InputSource for CliConfig {
        fn savings_input(&self) -> Result<SavingsInput> {
            self.effective_config()?.savings_input()
        }
    }

}
