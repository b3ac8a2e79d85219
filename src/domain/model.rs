use crate::utils::error::SavingsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unit in which the driver reported their mileage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timeframe {
    Week,
    Month,
    Year,
}

impl Timeframe {
    pub fn as_str(&self) -> &'static str {
        match self {
            Timeframe::Week => "week",
            Timeframe::Month => "month",
            Timeframe::Year => "year",
        }
    }
}

impl FromStr for Timeframe {
    type Err = SavingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "week" => Ok(Timeframe::Week),
            "month" => Ok(Timeframe::Month),
            "year" => Ok(Timeframe::Year),
            other => Err(SavingsError::InvalidTimeframe {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything needed to compare the fuel cost of two vehicles.
///
/// The timeframe is kept as the caller supplied it; it is only parsed when a
/// mileage figure is actually present, and a missing one is an error then.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsInput {
    #[serde(default, alias = "milesDriven")]
    pub miles_driven: Option<f64>,
    #[serde(default, alias = "milesDrivenTimeframe")]
    pub miles_driven_timeframe: Option<String>,
    #[serde(alias = "tradePpg")]
    pub trade_ppg: f64,
    #[serde(alias = "tradeMpg")]
    pub trade_mpg: f64,
    #[serde(alias = "newPpg")]
    pub new_ppg: f64,
    #[serde(alias = "newMpg")]
    pub new_mpg: f64,
}

impl SavingsInput {
    /// Mileage to calculate with, or `None` while nothing usable has been entered.
    /// Zero and NaN count as "nothing entered".
    pub fn entered_mileage(&self) -> Option<f64> {
        self.miles_driven.filter(|miles| *miles != 0.0 && !miles.is_nan())
    }

    /// The timeframe as given, or `""` when none was supplied.
    pub fn timeframe_str(&self) -> &str {
        self.miles_driven_timeframe.as_deref().unwrap_or_default()
    }
}

/// Per-vehicle costs and projected savings, all rounded to cents.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SavingsReport {
    pub monthly_mileage: f64,
    pub trade_monthly_cost: f64,
    pub new_monthly_cost: f64,
    pub monthly_savings: f64,
    pub annual_savings: f64,
    pub three_year_savings: f64,
}
