use crate::core::math::MathService;
use crate::domain::model::{SavingsInput, SavingsReport, Timeframe};
use crate::utils::error::{Result, SavingsError};

/// Decimal places used for every figure handed back to callers.
pub const RESULT_PRECISION: u32 = 2;

const WEEKS_PER_YEAR: f64 = 52.0;
const MONTHS_PER_YEAR: f64 = 12.0;

/// Stateless fuel-cost comparison between a trade-in and a new vehicle.
pub struct FuelSavingsCalculator;

impl FuelSavingsCalculator {
    /// Convert mileage reported per `timeframe` into miles per month.
    ///
    /// Weekly figures are annualized first and then split into months
    /// (`miles * 52 / 12`), which keeps results stable under rounding.
    pub fn normalize_mileage_to_monthly(miles_driven: f64, timeframe: &str) -> Result<f64> {
        let timeframe: Timeframe = timeframe.parse()?;
        Ok(Self::monthly_mileage(miles_driven, timeframe))
    }

    pub fn monthly_mileage(miles_driven: f64, timeframe: Timeframe) -> f64 {
        match timeframe {
            Timeframe::Week => (miles_driven * WEEKS_PER_YEAR) / MONTHS_PER_YEAR,
            Timeframe::Month => miles_driven,
            Timeframe::Year => miles_driven / MONTHS_PER_YEAR,
        }
    }

    /// `(monthly_mileage / economy_per_unit) * price_per_unit`.
    pub fn compute_monthly_fuel_cost(
        monthly_mileage: f64,
        price_per_unit: f64,
        economy_per_unit: f64,
    ) -> Result<f64> {
        // NaN fails this comparison too.
        if !(economy_per_unit > 0.0) {
            return Err(SavingsError::InvalidFuelEconomy {
                value: economy_per_unit,
            });
        }

        let units_used = monthly_mileage / economy_per_unit;
        Ok(units_used * price_per_unit)
    }

    /// Trade vehicle's monthly fuel cost minus the new vehicle's, rounded to cents.
    /// Positive means the new vehicle is cheaper to run.
    ///
    /// Returns `0` without looking at any other field when no mileage has been entered.
    pub fn compute_monthly_savings(input: &SavingsInput) -> Result<f64> {
        let Some(miles_driven) = input.entered_mileage() else {
            tracing::debug!("No mileage entered, monthly savings is 0");
            return Ok(0.0);
        };

        let costs = Self::monthly_costs(miles_driven, input)?;
        MathService::round_number(costs.savings(), RESULT_PRECISION)
    }

    /// Full breakdown behind [`Self::compute_monthly_savings`], including
    /// annual and three-year projections.
    pub fn compute_savings_report(input: &SavingsInput) -> Result<SavingsReport> {
        let Some(miles_driven) = input.entered_mileage() else {
            tracing::debug!("No mileage entered, returning empty report");
            return Ok(SavingsReport::default());
        };

        let costs = Self::monthly_costs(miles_driven, input)?;
        let savings = costs.savings();

        Ok(SavingsReport {
            monthly_mileage: MathService::round_number(costs.monthly_mileage, RESULT_PRECISION)?,
            trade_monthly_cost: MathService::round_number(costs.trade, RESULT_PRECISION)?,
            new_monthly_cost: MathService::round_number(costs.new, RESULT_PRECISION)?,
            monthly_savings: MathService::round_number(savings, RESULT_PRECISION)?,
            annual_savings: MathService::round_number(savings * MONTHS_PER_YEAR, RESULT_PRECISION)?,
            three_year_savings: MathService::round_number(savings * MONTHS_PER_YEAR * 3.0, RESULT_PRECISION)?,
        })
    }

    fn monthly_costs(miles_driven: f64, input: &SavingsInput) -> Result<MonthlyCosts> {
        let monthly_mileage =
            Self::normalize_mileage_to_monthly(miles_driven, input.timeframe_str())?;

        let trade = Self::compute_monthly_fuel_cost(monthly_mileage, input.trade_ppg, input.trade_mpg)
            .inspect_err(|e| tracing::debug!("trade vehicle: {}", e))?;
        let new = Self::compute_monthly_fuel_cost(monthly_mileage, input.new_ppg, input.new_mpg)
            .inspect_err(|e| tracing::debug!("new vehicle: {}", e))?;

        tracing::debug!(
            "{} miles/{} -> {} miles/month, trade cost {}, new cost {}",
            miles_driven,
            input.timeframe_str(),
            monthly_mileage,
            trade,
            new
        );

        Ok(MonthlyCosts {
            monthly_mileage,
            trade,
            new,
        })
    }
}

struct MonthlyCosts {
    monthly_mileage: f64,
    trade: f64,
    new: f64,
}

impl MonthlyCosts {
    fn savings(&self) -> f64 {
        self.trade - self.new
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn input(miles: Option<f64>, timeframe: &str) -> SavingsInput {
        SavingsInput {
            miles_driven: miles,
            miles_driven_timeframe: Some(timeframe.to_string()),
            trade_ppg: 3.5,
            trade_mpg: 20.0,
            new_ppg: 3.5,
            new_mpg: 30.0,
        }
    }

    #[test]
    fn test_normalize_week() {
        let monthly = FuelSavingsCalculator::normalize_mileage_to_monthly(300.0, "week").unwrap();
        assert_eq!(monthly, 1300.0);

        let monthly = FuelSavingsCalculator::normalize_mileage_to_monthly(100.0, "week").unwrap();
        assert_eq!(monthly, (100.0 * 52.0) / 12.0);
    }

    #[test]
    fn test_normalize_month_is_identity() {
        for miles in [0.0, 1.0, 1200.0, 333.33] {
            let monthly = FuelSavingsCalculator::normalize_mileage_to_monthly(miles, "month").unwrap();
            assert_eq!(monthly, miles);
        }
    }

    #[test]
    fn test_normalize_year() {
        for miles in [12000.0, 1000.0, 7.0] {
            let monthly = FuelSavingsCalculator::normalize_mileage_to_monthly(miles, "year").unwrap();
            assert!(approx_eq(monthly * 12.0, miles));
        }
    }

    #[test]
    fn test_normalize_is_linear() {
        for timeframe in ["week", "month", "year"] {
            let single = FuelSavingsCalculator::normalize_mileage_to_monthly(150.0, timeframe).unwrap();
            let double = FuelSavingsCalculator::normalize_mileage_to_monthly(300.0, timeframe).unwrap();
            assert!(approx_eq(double, single * 2.0), "{} is not linear", timeframe);
        }
    }

    #[test]
    fn test_normalize_rejects_unknown_timeframe() {
        match FuelSavingsCalculator::normalize_mileage_to_monthly(100.0, "decade") {
            Err(SavingsError::InvalidTimeframe { value }) => assert_eq!(value, "decade"),
            other => panic!("expected InvalidTimeframe, got {:?}", other),
        }
    }

    #[test]
    fn test_monthly_fuel_cost() {
        let cost = FuelSavingsCalculator::compute_monthly_fuel_cost(1200.0, 3.5, 20.0).unwrap();
        assert!(approx_eq(cost, 210.0));

        let cost = FuelSavingsCalculator::compute_monthly_fuel_cost(1200.0, 3.5, 30.0).unwrap();
        assert!(approx_eq(cost, 140.0));
    }

    #[test]
    fn test_monthly_fuel_cost_monotonicity() {
        let cheap = FuelSavingsCalculator::compute_monthly_fuel_cost(1000.0, 3.0, 25.0).unwrap();
        let pricey = FuelSavingsCalculator::compute_monthly_fuel_cost(1000.0, 4.0, 25.0).unwrap();
        assert!(pricey > cheap);

        let thirsty = FuelSavingsCalculator::compute_monthly_fuel_cost(1000.0, 3.0, 15.0).unwrap();
        let frugal = FuelSavingsCalculator::compute_monthly_fuel_cost(1000.0, 3.0, 45.0).unwrap();
        assert!(frugal < thirsty);
    }

    #[test]
    fn test_monthly_fuel_cost_rejects_bad_economy() {
        for economy in [0.0, -10.0, f64::NAN] {
            match FuelSavingsCalculator::compute_monthly_fuel_cost(1000.0, 3.0, economy) {
                Err(SavingsError::InvalidFuelEconomy { .. }) => {}
                other => panic!("expected InvalidFuelEconomy for {}, got {:?}", economy, other),
            }
        }
    }

    #[test]
    fn test_monthly_savings() {
        let savings = FuelSavingsCalculator::compute_monthly_savings(&input(Some(1200.0), "month")).unwrap();
        assert_eq!(savings, 70.0);
    }

    #[test]
    fn test_monthly_savings_can_be_negative() {
        let mut config = input(Some(1200.0), "month");
        config.new_mpg = 10.0;
        let savings = FuelSavingsCalculator::compute_monthly_savings(&config).unwrap();
        assert_eq!(savings, -210.0);
    }

    #[test]
    fn test_monthly_savings_without_mileage_skips_validation() {
        let mut config = input(None, "decade");
        config.new_mpg = 0.0;
        config.trade_ppg = f64::NAN;

        assert_eq!(FuelSavingsCalculator::compute_monthly_savings(&config).unwrap(), 0.0);

        config.miles_driven = Some(0.0);
        assert_eq!(FuelSavingsCalculator::compute_monthly_savings(&config).unwrap(), 0.0);
    }

    #[test]
    fn test_monthly_savings_propagates_invalid_timeframe() {
        let result = FuelSavingsCalculator::compute_monthly_savings(&input(Some(100.0), "fortnight"));
        assert!(matches!(result, Err(SavingsError::InvalidTimeframe { ref value }) if value == "fortnight"));
    }

    #[test]
    fn test_monthly_savings_requires_timeframe_once_mileage_entered() {
        let mut config = input(Some(100.0), "month");
        config.miles_driven_timeframe = None;

        match FuelSavingsCalculator::compute_monthly_savings(&config) {
            Err(SavingsError::InvalidTimeframe { value }) => assert!(value.is_empty()),
            other => panic!("expected InvalidTimeframe, got {:?}", other),
        }
        assert!(matches!(
            FuelSavingsCalculator::compute_savings_report(&config),
            Err(SavingsError::InvalidTimeframe { .. })
        ));

        config.miles_driven = None;
        assert_eq!(FuelSavingsCalculator::compute_monthly_savings(&config).unwrap(), 0.0);
    }

    #[test]
    fn test_monthly_savings_non_finite_price_is_invalid_number() {
        let mut config = input(Some(100.0), "month");
        config.trade_ppg = f64::INFINITY;
        let result = FuelSavingsCalculator::compute_monthly_savings(&config);
        assert!(matches!(result, Err(SavingsError::InvalidNumber { .. })));
    }

    #[test]
    fn test_savings_report() {
        let report = FuelSavingsCalculator::compute_savings_report(&input(Some(1200.0), "month")).unwrap();
        assert_eq!(report.monthly_mileage, 1200.0);
        assert_eq!(report.trade_monthly_cost, 210.0);
        assert_eq!(report.new_monthly_cost, 140.0);
        assert_eq!(report.monthly_savings, 70.0);
        assert_eq!(report.annual_savings, 840.0);
        assert_eq!(report.three_year_savings, 2520.0);
    }

    #[test]
    fn test_savings_report_without_mileage_is_empty() {
        let report = FuelSavingsCalculator::compute_savings_report(&input(None, "decade")).unwrap();
        assert_eq!(report, SavingsReport::default());
    }
}
