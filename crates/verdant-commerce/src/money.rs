//! Money type for representing monetary values.
//!
//! Amounts are stored in the currency's minor unit (paisa, cents) so cart
//! arithmetic never touches floating point. Catalog feeds hand us decimal
//! prices, which are converted once at the boundary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    PKR,
    USD,
}

impl Currency {
    /// Get the currency code (e.g., "PKR").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::PKR => "PKR",
            Currency::USD => "USD",
        }
    }

    /// Get the currency symbol used in price labels.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::PKR => "Rs",
            Currency::USD => "$",
        }
    }

    /// Number of decimal places in the minor unit.
    pub fn decimal_places(&self) -> u32 {
        2
    }

    /// Number of fraction digits shown in price labels.
    ///
    /// Rupee prices are shown rounded to whole units.
    pub fn display_places(&self) -> u32 {
        match self {
            Currency::PKR => 0,
            Currency::USD => 2,
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "PKR" => Some(Currency::PKR),
            "USD" => Some(Currency::USD),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in the smallest currency unit.
    pub amount_minor: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub fn new(amount_minor: i64, currency: Currency) -> Self {
        Self {
            amount_minor,
            currency,
        }
    }

    /// Create a Money value from a decimal amount.
    ///
    /// ```
    /// use verdant_commerce::money::{Money, Currency};
    /// let price = Money::from_decimal(1250.0, Currency::PKR);
    /// assert_eq!(price.amount_minor, 125_000);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let multiplier = 10_i64.pow(currency.decimal_places());
        let amount_minor = (amount * multiplier as f64).round() as i64;
        Self::new(amount_minor, currency)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_minor == 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        let divisor = 10_i64.pow(self.currency.decimal_places());
        self.amount_minor as f64 / divisor as f64
    }

    /// Format as a price label with grouped thousands (e.g., "Rs 1,250").
    pub fn display(&self) -> String {
        let places = self.currency.display_places();
        let shift = self.currency.decimal_places() - places;
        let divisor = 10_i64.pow(shift);
        // Round half away from zero to the displayed precision.
        let scaled = if self.amount_minor >= 0 {
            (self.amount_minor + divisor / 2) / divisor
        } else {
            (self.amount_minor - divisor / 2) / divisor
        };

        let unit = 10_i64.pow(places);
        let whole = (scaled / unit).unsigned_abs();
        let fraction = (scaled % unit).unsigned_abs();
        let sign = if scaled < 0 { "-" } else { "" };

        let mut label = format!("{}{} {}", sign, self.currency.symbol(), group_thousands(whole));
        if places > 0 {
            label.push_str(&format!(".{:0width$}", fraction, width = places as usize));
        }
        label
    }

    /// Try to add another Money value, returning None on currency mismatch or overflow.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount_minor
            .checked_add(other.amount_minor)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Multiply by a quantity, returning None on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        self.amount_minor
            .checked_mul(factor)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Sum an iterator of Money values, returning None on mismatch or overflow.
    pub fn try_sum<'a>(mut iter: impl Iterator<Item = &'a Money>, currency: Currency) -> Option<Money> {
        iter.try_fold(Money::zero(currency), |acc, m| acc.try_add(m))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_decimal() {
        let m = Money::from_decimal(49.99, Currency::USD);
        assert_eq!(m.amount_minor, 4999);

        let m = Money::from_decimal(850.0, Currency::PKR);
        assert_eq!(m.amount_minor, 85_000);
    }

    #[test]
    fn test_money_display_rupees() {
        assert_eq!(Money::from_decimal(1250.0, Currency::PKR).display(), "Rs 1,250");
        assert_eq!(Money::from_decimal(999.6, Currency::PKR).display(), "Rs 1,000");
        assert_eq!(Money::from_decimal(450.0, Currency::PKR).display(), "Rs 450");
        assert_eq!(Money::from_decimal(1_234_567.0, Currency::PKR).display(), "Rs 1,234,567");
    }

    #[test]
    fn test_money_display_dollars() {
        assert_eq!(Money::new(4999, Currency::USD).display(), "$ 49.99");
        assert_eq!(Money::new(105, Currency::USD).display(), "$ 1.05");
    }

    #[test]
    fn test_money_arithmetic() {
        let a = Money::new(1000, Currency::PKR);
        let b = Money::new(500, Currency::PKR);
        assert_eq!(a.try_add(&b).unwrap().amount_minor, 1500);
        assert_eq!(a.try_multiply(3).unwrap().amount_minor, 3000);
        assert!(a.try_add(&Money::new(1, Currency::USD)).is_none());
        assert!(Money::new(i64::MAX, Currency::PKR).try_multiply(2).is_none());
    }

    #[test]
    fn test_money_sum() {
        let items = [Money::new(100, Currency::PKR), Money::new(250, Currency::PKR)];
        let total = Money::try_sum(items.iter(), Currency::PKR).unwrap();
        assert_eq!(total.amount_minor, 350);

        let mixed = [Money::new(100, Currency::PKR), Money::new(1, Currency::USD)];
        assert!(Money::try_sum(mixed.iter(), Currency::PKR).is_none());
        assert_eq!(Money::try_sum(Vec::<Money>::new().iter(), Currency::USD), Some(Money::zero(Currency::USD)));
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("pkr"), Some(Currency::PKR));
        assert_eq!(Currency::from_code("EUR"), None);
    }
}
