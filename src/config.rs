use crate::models::currency::Currency;

/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Amount pre-filled into the form on first render
    pub const DEFAULT_AMOUNT: f64 = 1.0;

    /// Source currency pre-selected on first render
    pub const DEFAULT_FROM: Currency = Currency::Eur;

    /// Target currency pre-selected on first render
    pub const DEFAULT_TO: Currency = Currency::Usd;
}
