//! Property-based tests for the evaluator core.
//!
//! These tests use proptest to verify the machine's contract across
//! many randomly generated token streams.

use proptest::prelude::*;
use tally::core::{Digit, EvalState, InputToken, Numeral, Operator};
use tally::session::{Evaluator, Snapshot};

prop_compose! {
    fn arbitrary_digit()(value in 0..=9u8) -> Digit {
        Digit::new(value).expect("generator stays in range")
    }
}

prop_compose! {
    fn nonzero_digit()(value in 1..=9u8) -> Digit {
        Digit::new(value).expect("generator stays in range")
    }
}

prop_compose! {
    fn arbitrary_operator()(variant in 0..4u8) -> Operator {
        match variant {
            0 => Operator::Add,
            1 => Operator::Subtract,
            2 => Operator::Multiply,
            _ => Operator::Divide,
        }
    }
}

fn arbitrary_token() -> impl Strategy<Value = InputToken> {
    prop_oneof![
        arbitrary_digit().prop_map(InputToken::Digit),
        Just(InputToken::DecimalPoint),
        arbitrary_operator().prop_map(InputToken::Operator),
        Just(InputToken::Equals),
        Just(InputToken::Clear),
        Just(InputToken::Backspace),
        Just(InputToken::Percent),
    ]
}

/// Tokens that never start or resolve an operation, so the machine stays in
/// `Idle`/`EnteringOperand`.
fn operand_only_token() -> impl Strategy<Value = InputToken> {
    prop_oneof![
        arbitrary_digit().prop_map(InputToken::Digit),
        Just(InputToken::DecimalPoint),
        Just(InputToken::Clear),
        Just(InputToken::Backspace),
        Just(InputToken::Percent),
    ]
}

fn run(tokens: &[InputToken]) -> EvalState {
    tokens
        .iter()
        .fold(EvalState::initial(), |state, token| state.handle(*token))
}

proptest! {
    #[test]
    fn handle_is_deterministic(
        prefix in prop::collection::vec(arbitrary_token(), 0..20),
        token in arbitrary_token(),
    ) {
        let state = run(&prefix);
        prop_assert_eq!(state.handle(token), state.handle(token));
    }

    #[test]
    fn handle_is_total_and_preserves_invariants(
        tokens in prop::collection::vec(arbitrary_token(), 0..40)
    ) {
        let mut state = EvalState::initial();
        for token in tokens {
            state = state.handle(token);
            let display = state.display();
            prop_assert!(!display.is_empty());
            prop_assert!(display.chars().filter(|c| *c == '.').count() <= 1);
        }
    }

    #[test]
    fn typed_digits_concatenate(
        first in nonzero_digit(),
        rest in prop::collection::vec(arbitrary_digit(), 0..10),
    ) {
        let mut expected = first.as_char().to_string();
        let mut tokens = vec![InputToken::Digit(first)];
        for digit in rest {
            expected.push(digit.as_char());
            tokens.push(InputToken::Digit(digit));
        }
        let state = run(&tokens);
        prop_assert_eq!(state.display(), expected);
    }

    #[test]
    fn typed_digits_with_one_decimal_point_concatenate(
        whole in prop::collection::vec(arbitrary_digit(), 1..6),
        fraction in prop::collection::vec(arbitrary_digit(), 1..6),
    ) {
        let mut tokens: Vec<InputToken> = whole.iter().copied().map(InputToken::Digit).collect();
        tokens.push(InputToken::DecimalPoint);
        tokens.extend(fraction.iter().copied().map(InputToken::Digit));

        // A lone "0" is replaced by the next digit, never extended.
        let mut expected = String::new();
        for digit in &whole {
            if expected == "0" {
                expected.clear();
            }
            expected.push(digit.as_char());
        }
        expected.push('.');
        for digit in &fraction {
            expected.push(digit.as_char());
        }

        let state = run(&tokens);
        prop_assert_eq!(state.display(), expected);
    }

    #[test]
    fn clear_always_restores_the_initial_state(
        tokens in prop::collection::vec(arbitrary_token(), 0..40)
    ) {
        let state = run(&tokens).handle(InputToken::Clear);
        prop_assert_eq!(state, EvalState::initial());
    }

    #[test]
    fn backspace_reduces_any_operand_to_zero(
        digits in prop::collection::vec(arbitrary_digit(), 1..10)
    ) {
        let mut state = run(&digits.iter().copied().map(InputToken::Digit).collect::<Vec<_>>());
        for _ in 0..digits.len() {
            state = state.handle(InputToken::Backspace);
        }
        prop_assert_eq!(state.display(), "0");

        // Further backspaces are no-ops.
        let after_backspace = state.handle(InputToken::Backspace);
        prop_assert_eq!(after_backspace.display(), "0");
    }

    #[test]
    fn chaining_matches_a_left_fold(
        first in nonzero_digit(),
        chain in prop::collection::vec((arbitrary_operator(), nonzero_digit()), 1..6),
    ) {
        let mut tokens = vec![InputToken::Digit(first)];
        for (op, operand) in &chain {
            tokens.push(InputToken::Operator(*op));
            tokens.push(InputToken::Digit(*operand));
        }
        tokens.push(InputToken::Equals);

        // Model: strict left-to-right application, rounding at every step
        // exactly as the machine does.
        let mut model = Numeral::from_digit(first);
        for (op, operand) in &chain {
            model = op
                .apply(&model, &Numeral::from_digit(*operand))
                .expect("nonzero single-digit operands cannot fail");
        }

        let state = run(&tokens);
        prop_assert_eq!(state.display(), model.as_str());
    }

    #[test]
    fn decimal_point_is_idempotent(
        tokens in prop::collection::vec(arbitrary_token(), 0..20)
    ) {
        let once = run(&tokens).handle(InputToken::DecimalPoint);
        let twice = once.handle(InputToken::DecimalPoint);
        prop_assert_eq!(once.display(), twice.display());
    }

    #[test]
    fn equals_is_identity_when_nothing_is_pending(
        tokens in prop::collection::vec(operand_only_token(), 0..20)
    ) {
        let state = run(&tokens);
        prop_assert_eq!(state.handle(InputToken::Equals), state);
    }

    #[test]
    fn percent_never_touches_the_pending_operation(
        lhs in nonzero_digit(),
        op in arbitrary_operator(),
        rhs in prop::collection::vec(arbitrary_digit(), 0..4),
    ) {
        let mut tokens = vec![InputToken::Digit(lhs), InputToken::Operator(op)];
        tokens.extend(rhs.iter().copied().map(InputToken::Digit));

        let before = run(&tokens);
        let after = before.handle(InputToken::Percent);
        prop_assert_eq!(after.pending(), before.pending());
    }

    #[test]
    fn session_path_tracks_every_press(
        tokens in prop::collection::vec(arbitrary_token(), 1..20)
    ) {
        let mut session = Evaluator::new();
        session.press_all(tokens.clone());

        let history = session.history();
        prop_assert_eq!(history.len(), tokens.len());
        prop_assert_eq!(history.tokens(), tokens);

        let path = history.path();
        prop_assert_eq!(path.len(), history.len() + 1);
        prop_assert_eq!(path[0], &EvalState::initial());
        prop_assert_eq!(*path.last().expect("nonempty path"), session.state());

        for (i, transition) in history.transitions().iter().enumerate() {
            prop_assert_eq!(&transition.from, path[i]);
            prop_assert_eq!(&transition.to, path[i + 1]);
        }
    }

    #[test]
    fn snapshot_json_round_trips(
        tokens in prop::collection::vec(arbitrary_token(), 0..20)
    ) {
        let mut session = Evaluator::new();
        session.press_all(tokens);

        let json = Snapshot::capture(&session).to_json().expect("encodes");
        let restored = Snapshot::from_json(&json).expect("decodes").restore();
        prop_assert_eq!(restored, session);
    }

    #[test]
    fn snapshot_binary_round_trips(
        tokens in prop::collection::vec(arbitrary_token(), 0..20)
    ) {
        let mut session = Evaluator::new();
        session.press_all(tokens);

        let bytes = Snapshot::capture(&session).to_bytes().expect("encodes");
        let restored = Snapshot::from_bytes(&bytes).expect("decodes").restore();
        prop_assert_eq!(restored, session);
    }
}
