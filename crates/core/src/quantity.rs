//! Fixed-precision token quantities
//!
//! A [`Quantity`] is a non-negative decimal with a fixed number of fractional
//! digits, its precision. Internally it is an arbitrary-size count of
//! smallest units (`value * 10^precision`), so sums are exact at any
//! magnitude.
//!
//! ## Text form
//!
//! - Accepted: `digits` or `digits.digits`, with at most `precision`
//!   fractional digits (`"10"`, `"10.5"`, `"007.50"` at precision 2)
//! - Rejected: empty text, signs, whitespace, exponents, a bare `.` on either
//!   side (`".5"`, `"5."`)
//! - Rendered: exactly `precision` fractional digits, no point when the
//!   precision is 0 (`"10.50"`, `"0.00"`, `"42"`)

use crate::error::{Error, Result};
use num_bigint::BigUint;
use std::cmp::Ordering;
use std::fmt;

/// Non-negative exact decimal with an explicit precision
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Quantity {
    precision: u32,
    units: BigUint,
}

impl Quantity {
    /// The additive identity at `precision`
    pub fn zero(precision: u32) -> Self {
        Self {
            precision,
            units: BigUint::default(),
        }
    }

    /// Create a quantity from a count of smallest units
    ///
    /// `from_units(1050u32, 2)` is `10.50`.
    pub fn from_units(units: impl Into<BigUint>, precision: u32) -> Self {
        Self {
            precision,
            units: units.into(),
        }
    }

    /// Parse decimal text at `precision`
    ///
    /// Fewer fractional digits than `precision` are zero-padded; more are an
    /// error rather than a silent truncation.
    pub fn parse(text: &str, precision: u32) -> Result<Self> {
        if text.is_empty() {
            return Err(Error::invalid_quantity(text, "empty quantity"));
        }

        let (integer, fraction) = match text.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (text, None),
        };

        if integer.is_empty() {
            return Err(Error::invalid_quantity(text, "missing integer digits"));
        }
        if let Some(c) = integer.chars().find(|c| !c.is_ascii_digit()) {
            return Err(Error::invalid_quantity(
                text,
                format!("unexpected character {:?}", c),
            ));
        }

        let fraction = fraction.unwrap_or_default();
        if text.ends_with('.') {
            return Err(Error::invalid_quantity(text, "missing fractional digits"));
        }
        if let Some(c) = fraction.chars().find(|c| !c.is_ascii_digit()) {
            return Err(Error::invalid_quantity(
                text,
                format!("unexpected character {:?}", c),
            ));
        }
        if fraction.len() > precision as usize {
            return Err(Error::invalid_quantity(
                text,
                format!(
                    "{} fractional digits exceed precision {}",
                    fraction.len(),
                    precision
                ),
            ));
        }

        let mut digits = String::with_capacity(integer.len() + precision as usize);
        digits.push_str(integer);
        digits.push_str(fraction);
        digits.extend(std::iter::repeat('0').take(precision as usize - fraction.len()));

        let units = BigUint::parse_bytes(digits.as_bytes(), 10)
            .ok_or_else(|| Error::invalid_quantity(text, "not a decimal number"))?;
        Ok(Self { precision, units })
    }

    /// Exact sum of two quantities of the same precision
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: &Quantity) -> Result<Quantity> {
        if self.precision != other.precision {
            return Err(Error::PrecisionMismatch {
                left: self.precision,
                right: other.precision,
            });
        }
        Ok(Quantity {
            precision: self.precision,
            units: &self.units + &other.units,
        })
    }

    /// Render with exactly `precision` fractional digits
    pub fn to_decimal_string(&self) -> String {
        let digits = self.units.to_str_radix(10);
        let precision = self.precision as usize;
        if precision == 0 {
            return digits;
        }

        let mut padded = String::with_capacity(precision + digits.len() + 2);
        if digits.len() <= precision {
            padded.extend(std::iter::repeat('0').take(precision + 1 - digits.len()));
        }
        padded.push_str(&digits);

        let (integer, fraction) = padded.split_at(padded.len() - precision);
        format!("{}.{}", integer, fraction)
    }

    /// Number of fractional digits
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Count of smallest units
    pub fn units(&self) -> &BigUint {
        &self.units
    }

    /// True for the additive identity
    pub fn is_zero(&self) -> bool {
        self.units == BigUint::default()
    }
}

/// Quantities of different precisions are unordered
impl PartialOrd for Quantity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.precision != other.precision {
            return None;
        }
        Some(self.units.cmp(&other.units))
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_decimal_string())
    }
}
