//! Tally: a pure functional calculator engine
//!
//! Tally models a four-function chain calculator as a token-driven state
//! machine with a "pure core, imperative shell" split. The core is one
//! tagged state and one pure transition function; the shell is a thin
//! session that feeds tokens in event order and remembers how it got here.
//!
//! # Core Concepts
//!
//! - **Tokens**: the closed input alphabet of digits, decimal point, the
//!   four operators, equals, clear, backspace, and percent
//! - **State**: an explicit tagged variant per mode, so invalid field
//!   combinations cannot be represented
//! - **Chaining**: operators apply strictly left-to-right with no
//!   precedence, each consuming the previous result and the next operand
//! - **History**: immutable tracking of accepted tokens over time
//!
//! # Example
//!
//! ```rust
//! use tally::core::{EvalState, InputToken, Operator};
//! use tally::session::Evaluator;
//!
//! // Drive the pure core directly...
//! let state = EvalState::initial()
//!     .handle(InputToken::from_char('7').unwrap())
//!     .handle(InputToken::Operator(Operator::Multiply))
//!     .handle(InputToken::from_char('6').unwrap())
//!     .handle(InputToken::Equals);
//! assert_eq!(state.display(), "42");
//!
//! // ...or through a session that records the ride.
//! let mut session = Evaluator::new();
//! session.press_keys("2+3×4=").unwrap();
//! assert_eq!(session.display(), "20");
//! assert_eq!(session.history().len(), 6);
//! ```

pub mod core;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    ArithmeticError, Digit, EvalState, InputToken, Numeral, Operator, SessionHistory,
    TokenTransition, ERROR_DISPLAY,
};
pub use crate::session::{Evaluator, SessionError, Snapshot, SnapshotError, SNAPSHOT_VERSION};
