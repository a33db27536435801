use chrono::NaiveDate;

/// A priced conversion as returned by the rate service.
#[derive(Clone, Debug, PartialEq)]
pub struct Conversion {
    /// Converted value in the target currency.
    pub value: f64,
    /// Publication date of the rate, when the service reports one.
    pub date: Option<NaiveDate>,
}
