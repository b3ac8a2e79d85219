pub mod calculator;
pub mod math;

pub use crate::domain::model::{SavingsInput, SavingsReport, Timeframe};
pub use crate::domain::ports::InputSource;
pub use crate::utils::error::Result;
