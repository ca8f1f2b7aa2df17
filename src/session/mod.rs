//! Stateful session shell around the pure evaluator core.
//!
//! The core never mutates; this module owns the one mutable record a
//! running calculator needs (the current state plus the history of how it
//! got there) and applies tokens to it in event order.

mod snapshot;

pub use snapshot::{Snapshot, SnapshotError, SNAPSHOT_VERSION};

use crate::core::{EvalState, InputToken, SessionHistory, TokenTransition};
use chrono::Utc;
use thiserror::Error;

/// Errors from driving a session with a key script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("unrecognized key {0:?}")]
    UnrecognizedKey(char),
}

/// A calculator session: the current evaluation state plus the full record
/// of accepted tokens.
///
/// The collaborating display layer feeds one token per device event through
/// [`Evaluator::press`] and reads [`Evaluator::display`] and
/// [`Evaluator::pending_expression`] after each call to render.
///
/// # Example
///
/// ```rust
/// use tally::session::Evaluator;
///
/// let mut session = Evaluator::new();
/// session.press_keys("12+3=").unwrap();
///
/// assert_eq!(session.display(), "15");
/// assert_eq!(session.pending_expression(), None);
/// assert_eq!(session.history().len(), 5);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluator {
    current: EvalState,
    history: SessionHistory,
}

impl Evaluator {
    /// Start a session in the initial state, showing `"0"`.
    pub fn new() -> Self {
        Self {
            current: EvalState::initial(),
            history: SessionHistory::new(),
        }
    }

    /// Rebuild a session from previously captured parts.
    pub(crate) fn resume(state: EvalState, history: SessionHistory) -> Self {
        Self {
            current: state,
            history,
        }
    }

    /// The current evaluation state.
    pub fn state(&self) -> &EvalState {
        &self.current
    }

    /// Text to render as the primary numeral.
    pub fn display(&self) -> &str {
        self.current.display()
    }

    /// Hint line for the pending operation, e.g. `"12 +"`.
    pub fn pending_expression(&self) -> Option<String> {
        self.current.pending_expression()
    }

    /// The record of every accepted token.
    pub fn history(&self) -> &SessionHistory {
        &self.history
    }

    /// Accept one token: apply the transition and record it.
    ///
    /// Returns the state the token produced.
    pub fn press(&mut self, token: InputToken) -> &EvalState {
        let from = self.current.clone();
        let to = from.handle(token);
        self.history = self.history.record(TokenTransition {
            from,
            to: to.clone(),
            token,
            timestamp: Utc::now(),
        });
        self.current = to;
        &self.current
    }

    /// Accept a sequence of tokens in order.
    pub fn press_all(&mut self, tokens: impl IntoIterator<Item = InputToken>) -> &EvalState {
        for token in tokens {
            self.press(token);
        }
        &self.current
    }

    /// Drive the session from a key script such as `"2+3×4="`.
    ///
    /// Whitespace is skipped; any other unrecognized character stops the
    /// script with an error (tokens before it have already been applied).
    pub fn press_keys(&mut self, keys: &str) -> Result<&EvalState, SessionError> {
        for key in keys.chars() {
            if key.is_whitespace() {
                continue;
            }
            let token = InputToken::from_char(key).ok_or(SessionError::UnrecognizedKey(key))?;
            self.press(token);
        }
        Ok(&self.current)
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}
