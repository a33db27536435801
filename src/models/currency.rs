use super::error::AppError;

/// Currencies offered by the conversion form selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Currency {
    /// US Dollar
    Usd,
    /// Euro
    Eur,
    /// Canadian Dollar
    Cad,
    /// Indian Rupee
    Inr,
}

impl Currency {
    /// Returns the ISO 4217 code used in API query parameters.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Cad => "CAD",
            Currency::Inr => "INR",
        }
    }

    /// Returns the full currency name.
    pub fn name(&self) -> &'static str {
        match self {
            Currency::Usd => "US Dollar",
            Currency::Eur => "Euro",
            Currency::Cad => "Canadian Dollar",
            Currency::Inr => "Indian Rupee",
        }
    }

    /// All selectable currencies.
    pub fn all() -> &'static [Currency] {
        &[Currency::Usd, Currency::Eur, Currency::Cad, Currency::Inr]
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            "CAD" => Ok(Currency::Cad),
            "INR" => Ok(Currency::Inr),
            _ => Err(AppError::Config(format!("Unknown currency code: {s}"))),
        }
    }
}
