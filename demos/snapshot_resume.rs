//! Snapshot and Resume
//!
//! This example captures a session mid-calculation, round-trips it through
//! JSON, and resumes it as if the process had restarted.
//!
//! Run with: cargo run --example snapshot_resume

use tally::session::{Evaluator, Snapshot};

fn main() {
    println!("=== Snapshot and Resume ===\n");

    let mut session = Evaluator::new();
    session.press_keys("12+").expect("script uses known keys");

    println!("Session so far: display {}, pending {:?}", session.display(),
        session.pending_expression());

    let snapshot = Snapshot::capture(&session);
    let json = snapshot.to_json().expect("snapshot encodes");
    println!("\nCaptured snapshot {} ({} bytes of JSON)", snapshot.id, json.len());

    // ... process restarts here ...

    let mut resumed = Snapshot::from_json(&json).expect("snapshot decodes").restore();
    println!("\nResumed: display {}, pending {:?}", resumed.display(),
        resumed.pending_expression());

    resumed.press_keys("3=").expect("script uses known keys");
    println!("After pressing 3=: display {}", resumed.display());

    println!("\n=== Example Complete ===");
}
