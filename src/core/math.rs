use crate::utils::error::{Result, SavingsError};
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Largest scale a `Decimal` can carry.
const MAX_SCALE: u32 = 28;

/// Every f64 at or above this magnitude is already a whole number.
const INTEGRAL_THRESHOLD: f64 = 4_503_599_627_370_496.0; // 2^52

/// Numeric helpers used to finalize user-facing figures.
pub struct MathService;

impl MathService {
    /// Round `value` to `decimal_places` digits, halves away from zero.
    ///
    /// Rounding happens on the shortest decimal representation of `value`
    /// rather than on its binary expansion, so `1.005` becomes `1.01` and
    /// `-2.675` becomes `-2.68`. Non-finite input is rejected.
    pub fn round_number(value: f64, decimal_places: u32) -> Result<f64> {
        if !value.is_finite() {
            return Err(SavingsError::InvalidNumber { value });
        }

        let scale = decimal_places.min(MAX_SCALE);

        if value == 0.0 || value.abs() >= INTEGRAL_THRESHOLD {
            return Ok(value);
        }
        if value.abs() < 0.5 * 10f64.powi(-(scale as i32)) {
            return Ok(0.0);
        }

        match Decimal::from_str(&value.to_string()) {
            Ok(decimal) => {
                let rounded =
                    decimal.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
                rounded
                    .to_string()
                    .parse::<f64>()
                    .map_err(|_| SavingsError::InvalidNumber { value })
            }
            Err(e) => {
                tracing::debug!("decimal parse of {} failed ({}), using float rounding", value, e);
                Ok(Self::round_scaled(value, scale))
            }
        }
    }

    fn round_scaled(value: f64, scale: u32) -> f64 {
        let factor = 10f64.powi(scale as i32);
        let scaled = value * factor;
        if scaled.is_finite() {
            scaled.round() / factor
        } else {
            value
        }
    }
}
