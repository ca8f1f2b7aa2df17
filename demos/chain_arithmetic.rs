//! Chain Arithmetic
//!
//! This example shows the chain-calculator evaluation model: operators
//! apply strictly left-to-right with no precedence, repeated operator
//! presses collapse, and division by zero lands in a recoverable error
//! state.
//!
//! Run with: cargo run --example chain_arithmetic

use tally::session::Evaluator;

fn evaluate(keys: &str) -> String {
    let mut session = Evaluator::new();
    session.press_keys(keys).expect("script uses known keys");
    session.display().to_string()
}

fn main() {
    println!("=== Chain Arithmetic ===\n");

    println!("No precedence - each operator consumes the previous result:");
    println!("  2+3×4=   ->  {}   ((2 + 3) × 4, not 2 + 12)", evaluate("2+3×4="));
    println!("  10-2-3=  ->  {}", evaluate("10-2-3="));

    println!("\nRepeated operator presses collapse to the newest one:");
    println!("  6+×2=    ->  {}   (evaluates 6 × 2)", evaluate("6+×2="));

    println!("\nPercent rewrites only the display:");
    println!("  12+50%=  ->  {}   (evaluates 12 + 0.5)", evaluate("12+50%="));

    println!("\nDivision by zero is an error display, not a crash:");
    println!("  5÷0=     ->  {}", evaluate("5÷0="));
    println!("  5÷0=C8   ->  {}   (clear recovers)", evaluate("5÷0=C8"));

    println!("\nFloat artifacts never reach the display:");
    println!("  0.1+0.2= ->  {}", evaluate("0.1+0.2="));

    println!("\n=== Example Complete ===");
}
