use crate::domain::model::{SavingsInput, Timeframe};
use crate::utils::error::{Result, SavingsError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_positive_finite(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(SavingsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite number greater than zero".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_negative_finite(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(SavingsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite number and cannot be negative".to_string(),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| SavingsError::MissingConfigError {
        field: field_name.to_string(),
    })
}

impl Validate for SavingsInput {
    /// Mirrors the calculator: nothing is checked until mileage has been entered.
    fn validate(&self) -> Result<()> {
        let Some(miles_driven) = self.entered_mileage() else {
            return Ok(());
        };

        validate_non_negative_finite("miles_driven", miles_driven)?;
        self.timeframe_str().parse::<Timeframe>()?;
        validate_positive_finite("trade_ppg", self.trade_ppg)?;
        validate_positive_finite("trade_mpg", self.trade_mpg)?;
        validate_positive_finite("new_ppg", self.new_ppg)?;
        validate_positive_finite("new_mpg", self.new_mpg)?;
        Ok(())
    }
}
