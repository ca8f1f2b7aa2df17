//! Token transition history tracking.
//!
//! Every accepted token moves the machine from one state to the next; the
//! history keeps those moves in order, immutably. Recording returns a new
//! history and leaves the original untouched.

use super::state::EvalState;
use super::token::InputToken;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of one accepted token and the transition it caused.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenTransition {
    /// The state the token was applied to
    pub from: EvalState,
    /// The state it produced
    pub to: EvalState,
    /// The token that was accepted
    pub token: InputToken,
    /// When the token was accepted
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of token transitions.
///
/// `record` is a pure function - it does not mutate the existing history
/// but returns a new one with the transition appended.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use tally::core::{EvalState, InputToken, SessionHistory, TokenTransition};
///
/// let from = EvalState::initial();
/// let to = from.handle(InputToken::DecimalPoint);
///
/// let history = SessionHistory::new().record(TokenTransition {
///     from: from.clone(),
///     to: to.clone(),
///     token: InputToken::DecimalPoint,
///     timestamp: Utc::now(),
/// });
///
/// let path = history.path();
/// assert_eq!(path, vec![&from, &to]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionHistory {
    transitions: Vec<TokenTransition>,
}

impl SessionHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, transition: TokenTransition) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// The path of states traversed: the starting state, then the `to`
    /// state of each transition. Empty for an empty history.
    pub fn path(&self) -> Vec<&EvalState> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// The tokens accepted, in order.
    pub fn tokens(&self) -> Vec<InputToken> {
        self.transitions.iter().map(|t| t.token).collect()
    }

    /// Wall-clock time between the first and last transition.
    ///
    /// `None` for an empty history.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// All recorded transitions in order.
    pub fn transitions(&self) -> &[TokenTransition] {
        &self.transitions
    }

    /// Number of recorded transitions.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
