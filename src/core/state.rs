//! Evaluation state and the token transition function.
//!
//! The whole evaluator is one tagged variant plus one pure `handle`
//! function. Each variant carries only the data meaningful in that mode, so
//! invalid combinations (an operator without a left operand, a pending
//! operand with nothing awaited) cannot be represented at all.

use super::numeral::Numeral;
use super::token::{Digit, InputToken, Operator};
use serde::{Deserialize, Serialize};

/// Text rendered when an evaluation failed (division by zero or overflow).
pub const ERROR_DISPLAY: &str = "Error";

/// The evaluator's state, one variant per mode.
///
/// Transitions go through [`EvalState::handle`], which is pure and total:
/// every token in every state yields a well-defined next state, never a
/// panic or a fault.
///
/// # Example
///
/// ```rust
/// use tally::core::{EvalState, InputToken};
///
/// let mut state = EvalState::initial();
/// for key in "2+3×4=".chars() {
///     state = state.handle(InputToken::from_char(key).unwrap());
/// }
///
/// // Chain evaluation is left-to-right, no precedence: (2 + 3) × 4.
/// assert_eq!(state.display(), "20");
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum EvalState {
    /// Fresh, cleared, or holding a completed result. The next digit or
    /// decimal point starts a new operand rather than extending the display.
    Idle { display: Numeral },

    /// The first operand is being typed; nothing is pending.
    EnteringOperand { display: Numeral },

    /// An operator was accepted; the next digit or decimal point starts the
    /// second operand. `display` mirrors `lhs` until a `Percent` rewrites
    /// it independently.
    OperatorPending {
        lhs: Numeral,
        op: Operator,
        display: Numeral,
    },

    /// The second operand is being typed under a pending operator.
    AwaitingSecondOperand {
        lhs: Numeral,
        op: Operator,
        display: Numeral,
    },

    /// A failed evaluation. Sticky for operators and equals; digits and the
    /// decimal point start a fresh operand, and `Clear` fully recovers.
    Error,
}

impl EvalState {
    /// The state a session starts in: showing `"0"`, nothing pending.
    pub fn initial() -> Self {
        Self::Idle {
            display: Numeral::zero(),
        }
    }

    /// The state's name for display and diagnostics.
    pub fn name(&self) -> &str {
        match self {
            Self::Idle { .. } => "Idle",
            Self::EnteringOperand { .. } => "EnteringOperand",
            Self::OperatorPending { .. } => "OperatorPending",
            Self::AwaitingSecondOperand { .. } => "AwaitingSecondOperand",
            Self::Error => "Error",
        }
    }

    /// Whether this is the error display state.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    /// Text to render as the primary numeral.
    pub fn display(&self) -> &str {
        match self {
            Self::Idle { display }
            | Self::EnteringOperand { display }
            | Self::OperatorPending { display, .. }
            | Self::AwaitingSecondOperand { display, .. } => display.as_str(),
            Self::Error => ERROR_DISPLAY,
        }
    }

    /// Pending left operand and operator, when one awaits resolution.
    pub fn pending(&self) -> Option<(&Numeral, Operator)> {
        match self {
            Self::OperatorPending { lhs, op, .. }
            | Self::AwaitingSecondOperand { lhs, op, .. } => Some((lhs, *op)),
            _ => None,
        }
    }

    /// Hint line rendered above the display, e.g. `"12 +"`.
    ///
    /// `None` when nothing is pending, so the collaborator renders a blank.
    pub fn pending_expression(&self) -> Option<String> {
        self.pending()
            .map(|(lhs, op)| format!("{lhs} {}", op.symbol()))
    }

    /// Apply one input token, producing the next state.
    ///
    /// Pure and total: the receiver is untouched and every state/token
    /// combination is defined. Division by zero (and overflow) land in
    /// [`EvalState::Error`] instead of panicking or displaying `NaN`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tally::core::{EvalState, InputToken};
    ///
    /// let mut state = EvalState::initial();
    /// for key in "5÷0=".chars() {
    ///     state = state.handle(InputToken::from_char(key).unwrap());
    /// }
    /// assert!(state.is_error());
    ///
    /// // Clear is the documented recovery path.
    /// let cleared = state.handle(InputToken::Clear);
    /// assert_eq!(cleared, EvalState::initial());
    /// ```
    pub fn handle(&self, token: InputToken) -> EvalState {
        match token {
            InputToken::Digit(digit) => self.digit(digit),
            InputToken::DecimalPoint => self.decimal_point(),
            InputToken::Operator(op) => self.operator(op),
            InputToken::Equals => self.equals(),
            InputToken::Clear => Self::initial(),
            InputToken::Backspace => self.backspace(),
            InputToken::Percent => self.percent(),
        }
    }

    fn digit(&self, digit: Digit) -> EvalState {
        match self {
            Self::Idle { .. } | Self::Error => Self::EnteringOperand {
                display: Numeral::from_digit(digit),
            },
            Self::EnteringOperand { display } => Self::EnteringOperand {
                display: display.push_digit(digit),
            },
            Self::OperatorPending { lhs, op, .. } => Self::AwaitingSecondOperand {
                lhs: lhs.clone(),
                op: *op,
                display: Numeral::from_digit(digit),
            },
            Self::AwaitingSecondOperand { lhs, op, display } => Self::AwaitingSecondOperand {
                lhs: lhs.clone(),
                op: *op,
                display: display.push_digit(digit),
            },
        }
    }

    fn decimal_point(&self) -> EvalState {
        match self {
            Self::Idle { .. } | Self::Error => Self::EnteringOperand {
                display: Numeral::zero().push_decimal_point(),
            },
            Self::EnteringOperand { display } => Self::EnteringOperand {
                display: display.push_decimal_point(),
            },
            Self::OperatorPending { lhs, op, .. } => Self::AwaitingSecondOperand {
                lhs: lhs.clone(),
                op: *op,
                display: Numeral::zero().push_decimal_point(),
            },
            Self::AwaitingSecondOperand { lhs, op, display } => Self::AwaitingSecondOperand {
                lhs: lhs.clone(),
                op: *op,
                display: display.push_decimal_point(),
            },
        }
    }

    fn operator(&self, op: Operator) -> EvalState {
        match self {
            // A second operand was entered: resolve the pending operation
            // first, then chain under the new operator.
            Self::AwaitingSecondOperand {
                lhs,
                op: pending,
                display,
            } => match pending.apply(lhs, display) {
                Ok(result) => Self::OperatorPending {
                    lhs: result.clone(),
                    op,
                    display: result,
                },
                Err(_) => Self::Error,
            },
            // First operator of a chain, or an operator pressed again before
            // any new operand: the current display becomes the left operand
            // and the newest operator overwrites any pending one.
            Self::Idle { display }
            | Self::EnteringOperand { display }
            | Self::OperatorPending { display, .. } => Self::OperatorPending {
                lhs: display.clone(),
                op,
                display: display.clone(),
            },
            Self::Error => Self::Error,
        }
    }

    fn equals(&self) -> EvalState {
        match self {
            Self::OperatorPending { lhs, op, display }
            | Self::AwaitingSecondOperand { lhs, op, display } => match op.apply(lhs, display) {
                Ok(result) => Self::Idle { display: result },
                Err(_) => Self::Error,
            },
            // Nothing pending: equals leaves the state untouched.
            Self::Idle { .. } | Self::EnteringOperand { .. } | Self::Error => self.clone(),
        }
    }

    fn backspace(&self) -> EvalState {
        match self {
            Self::EnteringOperand { display } => Self::EnteringOperand {
                display: display.pop(),
            },
            Self::AwaitingSecondOperand { lhs, op, display } => Self::AwaitingSecondOperand {
                lhs: lhs.clone(),
                op: *op,
                display: display.pop(),
            },
            // No operand entry in progress: nothing to erase.
            Self::Idle { .. } | Self::OperatorPending { .. } | Self::Error => self.clone(),
        }
    }

    fn percent(&self) -> EvalState {
        match self {
            Self::Idle { display } => Self::Idle {
                display: display.percent(),
            },
            Self::EnteringOperand { display } => Self::EnteringOperand {
                display: display.percent(),
            },
            Self::OperatorPending { lhs, op, display } => Self::OperatorPending {
                lhs: lhs.clone(),
                op: *op,
                display: display.percent(),
            },
            Self::AwaitingSecondOperand { lhs, op, display } => Self::AwaitingSecondOperand {
                lhs: lhs.clone(),
                op: *op,
                display: display.percent(),
            },
            Self::Error => Self::Error,
        }
    }

    /// Whether every numeral in the state satisfies the text invariants.
    /// Used to validate states that crossed a serialization boundary.
    pub(crate) fn is_well_formed(&self) -> bool {
        match self {
            Self::Idle { display } | Self::EnteringOperand { display } => display.is_well_formed(),
            Self::OperatorPending { lhs, display, .. }
            | Self::AwaitingSecondOperand { lhs, display, .. } => {
                lhs.is_well_formed() && display.is_well_formed()
            }
            Self::Error => true,
        }
    }
}

impl Default for EvalState {
    fn default() -> Self {
        Self::initial()
    }
}
