use crate::config::OutputFormat;
use crate::domain::model::SavingsInput;
use crate::domain::ports::InputSource;
use crate::utils::error::{Result, SavingsError};
use crate::utils::validation::{validate_required_field, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub driving: DrivingConfig,
    #[serde(default)]
    pub trade: VehicleConfig,
    #[serde(default)]
    pub new: VehicleConfig,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DrivingConfig {
    pub miles_driven: Option<f64>,
    pub timeframe: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VehicleConfig {
    pub ppg: Option<f64>,
    pub mpg: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
}

impl TomlConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SavingsError::ConfigParseError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR_NAME}` with the variable's value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SavingsError::ConfigParseError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn output_format(&self) -> Option<OutputFormat> {
        self.output.as_ref().and_then(|o| o.format)
    }

    fn vehicle_value(field_name: &str, value: Option<f64>, required: bool) -> Result<f64> {
        if required {
            validate_required_field(field_name, &value).copied()
        } else {
            Ok(value.unwrap_or(0.0))
        }
    }
}

impl InputSource for TomlConfig {
    fn savings_input(&self) -> Result<SavingsInput> {
        let miles_driven = self.driving.miles_driven;
        // Vehicle figures are only needed once there is mileage to price.
        let required = miles_driven.is_some_and(|miles| miles != 0.0 && !miles.is_nan());

        Ok(SavingsInput {
            miles_driven,
            miles_driven_timeframe: self.driving.timeframe.clone(),
            trade_ppg: Self::vehicle_value("trade.ppg", self.trade.ppg, required)?,
            trade_mpg: Self::vehicle_value("trade.mpg", self.trade.mpg, required)?,
            new_ppg: Self::vehicle_value("new.ppg", self.new.ppg, required)?,
            new_mpg: Self::vehicle_value("new.mpg", self.new.mpg, required)?,
        })
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.savings_input()?.validate()
    }
}
