use crate::domain::model::SavingsInput;
use crate::utils::error::Result;

/// Anything that can hand the calculator a filled-in [`SavingsInput`]
/// (command line flags, a TOML file, ...).
pub trait InputSource {
    fn savings_input(&self) -> Result<SavingsInput>;
}
