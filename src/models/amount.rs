/// Outcome of validating the raw amount string typed into the form.
///
/// Follows the loose semantics of an HTML number input: the raw string is
/// trimmed, and a cleared field (empty string) counts as zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AmountInput {
    /// A positive value; the stored amount should be replaced.
    Valid(f64),
    /// Exactly zero; the stored amount becomes zero but an error is shown.
    Zero,
    /// A negative value; rejected without touching the stored amount.
    Negative,
    /// Not parseable as a number; rejected without touching the stored amount.
    Invalid,
}

impl AmountInput {
    /// Classifies a raw input string.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::Zero;
        }

        let Ok(value) = trimmed.parse::<f64>() else {
            return Self::Invalid;
        };

        if value.is_nan() {
            Self::Invalid
        } else if value < 0.0 {
            Self::Negative
        } else if value == 0.0 {
            Self::Zero
        } else {
            Self::Valid(value)
        }
    }

    /// Message shown to the user, or `None` when the input is accepted.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Valid(_) => None,
            Self::Zero => Some("Please enter a number greater than 0"),
            Self::Negative => Some("Please enter a positive number"),
            Self::Invalid => Some("Please enter a valid number"),
        }
    }
}
