//! Numeric display text with invariant-preserving editing.
//!
//! The display of the evaluator is text, not a number: `"0."` and `"0.50"`
//! are legitimate mid-entry values that a float cannot represent. `Numeral`
//! owns that text and keeps it well-formed through every edit.

use super::token::Digit;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Owned numeric text shown on the calculator display.
///
/// A `Numeral` is always a syntactically valid partial or complete decimal
/// numeral: never empty, and holding at most one decimal point. Editing
/// methods are pure - they take `&self` and return the edited numeral,
/// leaving the original untouched.
///
/// # Example
///
/// ```rust
/// use tally::core::{Digit, Numeral};
///
/// let five = Digit::new(5).unwrap();
/// let zero = Digit::new(0).unwrap();
///
/// let numeral = Numeral::zero()
///     .push_digit(five)
///     .push_decimal_point()
///     .push_digit(zero);
///
/// assert_eq!(numeral.as_str(), "5.0");
/// assert_eq!(numeral.value(), 5.0);
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Numeral(String);

impl Numeral {
    /// The default display value, `"0"`.
    pub fn zero() -> Self {
        Self("0".to_string())
    }

    /// Start a fresh operand from a single digit.
    pub fn from_digit(digit: Digit) -> Self {
        Self(digit.as_char().to_string())
    }

    /// Append a digit, replacing a lone `"0"` instead of extending it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tally::core::{Digit, Numeral};
    ///
    /// let seven = Digit::new(7).unwrap();
    /// assert_eq!(Numeral::zero().push_digit(seven).as_str(), "7");
    ///
    /// let three = Digit::new(3).unwrap();
    /// assert_eq!(Numeral::from_digit(seven).push_digit(three).as_str(), "73");
    /// ```
    pub fn push_digit(&self, digit: Digit) -> Self {
        if self.0 == "0" {
            Self::from_digit(digit)
        } else {
            let mut text = self.0.clone();
            text.push(digit.as_char());
            Self(text)
        }
    }

    /// Append a decimal point if one is not already present.
    ///
    /// Idempotent: a numeral that already carries a point is returned
    /// unchanged.
    pub fn push_decimal_point(&self) -> Self {
        if self.0.contains('.') {
            self.clone()
        } else {
            let mut text = self.0.clone();
            text.push('.');
            Self(text)
        }
    }

    /// Remove the last character; an emptied numeral becomes `"0"`.
    pub fn pop(&self) -> Self {
        let mut text = self.0.clone();
        text.pop();
        // A bare sign is no numeral either.
        if text.is_empty() || text == "-" {
            Self::zero()
        } else {
            Self(text)
        }
    }

    /// The numeral divided by 100, canonically re-serialized.
    ///
    /// ```rust
    /// use tally::core::Numeral;
    ///
    /// assert_eq!(Numeral::from_value(50.0).percent().as_str(), "0.5");
    /// ```
    pub fn percent(&self) -> Self {
        let scaled = self.value() / 100.0;
        if scaled.is_finite() {
            Self::from_value(scaled)
        } else {
            self.clone()
        }
    }

    /// Numeric value of the text.
    ///
    /// Partial numerals parse naturally (`"0."` is 0). Malformed text is
    /// unreachable through this type's constructors; should it arrive via
    /// unchecked deserialization it resolves to NaN and surfaces as an
    /// evaluation error downstream.
    pub fn value(&self) -> f64 {
        self.0.parse().unwrap_or(f64::NAN)
    }

    /// Canonical text for a computed value.
    ///
    /// The value is rounded to 12 significant digits and printed in the
    /// shortest round-trip decimal form, so float artifacts never reach the
    /// display:
    ///
    /// ```rust
    /// use tally::core::Numeral;
    ///
    /// assert_eq!(Numeral::from_value(0.1 + 0.2).as_str(), "0.3");
    /// assert_eq!(Numeral::from_value(20.0).as_str(), "20");
    /// ```
    ///
    /// Callers pass finite values; non-finite results are rejected at the
    /// arithmetic seam before reaching this constructor.
    pub fn from_value(value: f64) -> Self {
        let rounded: f64 = format!("{value:.11e}").parse().unwrap_or(value);
        Self(rounded.to_string())
    }

    /// The display text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the text still satisfies the numeral invariants. Used to
    /// validate numerals that crossed a serialization boundary.
    pub(crate) fn is_well_formed(&self) -> bool {
        let unsigned = self.0.strip_prefix('-').unwrap_or(&self.0);
        !unsigned.is_empty()
            && unsigned != "."
            && unsigned.chars().filter(|c| *c == '.').count() <= 1
            && unsigned.chars().all(|c| c.is_ascii_digit() || c == '.')
    }
}

impl Default for Numeral {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
