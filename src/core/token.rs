//! Input token alphabet and binary operation resolution.
//!
//! Every key the collaborating display layer can forward is one variant of
//! the closed [`InputToken`] enum. Keeping the alphabet closed makes the
//! transition function total: there is no unrecognized-input path to handle.

use super::numeral::Numeral;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A single keypad digit, 0 through 9.
///
/// Construction is validated, so a `Digit` in hand is always in range.
///
/// # Example
///
/// ```rust
/// use tally::core::Digit;
///
/// let seven = Digit::new(7).unwrap();
/// assert_eq!(seven.value(), 7);
/// assert_eq!(seven.as_char(), '7');
/// assert!(Digit::new(12).is_none());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

/// Error for digit values outside 0..=9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("digit out of range: {0}")]
pub struct InvalidDigit(pub u8);

impl Digit {
    /// Create a digit, rejecting values above 9.
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    /// Parse a digit character.
    pub fn from_char(key: char) -> Option<Self> {
        key.to_digit(10).map(|value| Self(value as u8))
    }

    /// The numeric value, 0..=9.
    pub fn value(self) -> u8 {
        self.0
    }

    /// The digit as its keypad character.
    pub fn as_char(self) -> char {
        (b'0' + self.0) as char
    }
}

impl TryFrom<u8> for Digit {
    type Error = InvalidDigit;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(InvalidDigit(value))
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Binary operator in the closed four-function set.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// Errors from resolving a binary operation.
///
/// The transition function absorbs these into the error display state; they
/// never abort an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("result is not a finite number")]
    Overflow,
}

impl Operator {
    /// The operator's keypad symbol.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '×',
            Self::Divide => '÷',
        }
    }

    /// Parse a keypad symbol. `*` and `/` are accepted as ASCII aliases
    /// for `×` and `÷`.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '×' | '*' => Some(Self::Multiply),
            '÷' | '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Resolve the binary operation over two operands.
    ///
    /// Division by zero and non-finite results (overflow) are reported as
    /// [`ArithmeticError`]s instead of producing `inf`/`NaN` display text.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tally::core::{ArithmeticError, Numeral, Operator};
    ///
    /// let six = Numeral::from_value(6.0);
    /// let two = Numeral::from_value(2.0);
    /// let zero = Numeral::zero();
    ///
    /// assert_eq!(Operator::Divide.apply(&six, &two).unwrap().as_str(), "3");
    /// assert_eq!(
    ///     Operator::Divide.apply(&six, &zero),
    ///     Err(ArithmeticError::DivisionByZero)
    /// );
    /// ```
    pub fn apply(self, lhs: &Numeral, rhs: &Numeral) -> Result<Numeral, ArithmeticError> {
        let a = lhs.value();
        let b = rhs.value();
        let result = match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => {
                if b == 0.0 {
                    return Err(ArithmeticError::DivisionByZero);
                }
                a / b
            }
        };
        if !result.is_finite() {
            return Err(ArithmeticError::Overflow);
        }
        Ok(Numeral::from_value(result))
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One discrete user input accepted by the evaluator.
///
/// # Example
///
/// ```rust
/// use tally::core::{InputToken, Operator};
///
/// assert_eq!(InputToken::from_char('÷'), Some(InputToken::Operator(Operator::Divide)));
/// assert_eq!(InputToken::from_char('='), Some(InputToken::Equals));
/// assert_eq!(InputToken::from_char('?'), None);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum InputToken {
    /// A digit key, `0`..`9`.
    Digit(Digit),
    /// The `.` key.
    DecimalPoint,
    /// One of the four operator keys.
    Operator(Operator),
    /// The `=` key.
    Equals,
    /// The clear key, written `C` in key scripts.
    Clear,
    /// The erase-last-character key, written `<` in key scripts.
    Backspace,
    /// The `%` key.
    Percent,
}

impl InputToken {
    /// Parse one key-script character.
    ///
    /// This is a convenience for demos and test harnesses that drive the
    /// machine from compact scripts like `"2+3×4="`; it is not a device
    /// input layer.
    pub fn from_char(key: char) -> Option<Self> {
        if let Some(digit) = Digit::from_char(key) {
            return Some(Self::Digit(digit));
        }
        if let Some(op) = Operator::from_symbol(key) {
            return Some(Self::Operator(op));
        }
        match key {
            '.' => Some(Self::DecimalPoint),
            '=' => Some(Self::Equals),
            'C' | 'c' => Some(Self::Clear),
            '<' => Some(Self::Backspace),
            '%' => Some(Self::Percent),
            _ => None,
        }
    }

    /// The canonical key-script character for this token.
    pub fn as_char(self) -> char {
        match self {
            Self::Digit(digit) => digit.as_char(),
            Self::DecimalPoint => '.',
            Self::Operator(op) => op.symbol(),
            Self::Equals => '=',
            Self::Clear => 'C',
            Self::Backspace => '<',
            Self::Percent => '%',
        }
    }
}

impl fmt::Display for InputToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
