//! Basic Calculator Session
//!
//! This example drives a session one key at a time and shows what the
//! display layer would render after each press.
//!
//! Key concepts:
//! - One token per device event
//! - Reading `display` and the pending-expression hint after every press
//! - The session's token history
//!
//! Run with: cargo run --example basic_session

use tally::session::Evaluator;
use tally::InputToken;

fn main() {
    println!("=== Basic Calculator Session ===\n");

    let mut session = Evaluator::new();
    println!("Session starts showing: {}\n", session.display());

    for key in "12+7.5=".chars() {
        let token = InputToken::from_char(key).expect("known key");
        session.press(token);

        let hint = session.pending_expression().unwrap_or_default();
        println!("press {key}   ->  [{:>10}]   {hint}", session.display());
    }

    println!("\nTokens accepted, in order:");
    let keys: String = session.history().tokens().iter().map(|t| t.as_char()).collect();
    println!("  {keys}");

    println!("\nStates traversed:");
    for state in session.history().path() {
        println!("  {:<22} display {}", state.name(), state.display());
    }

    println!("\n=== Example Complete ===");
}
