//! The Signature Wall
//!
//! This example renders the demo-seeded store the way the petition page
//! would: a counter, a progress bar toward the signature goal, and the
//! most recent signatures.
//!
//! Run with: cargo run --example signature_wall

use signwall::SignatureStore;

const GOAL: usize = 100;

fn main() {
    println!("=== The Signature Wall ===\n");

    let wall = SignatureStore::demo();

    println!("{} of {GOAL} signatures", wall.count());

    let filled = (wall.fraction_of_goal(GOAL) * 20.0).round() as usize;
    println!("[{}{}]\n", "#".repeat(filled), "-".repeat(20 - filled));

    println!("Most recent signatures:");
    for signature in wall.recent(10) {
        println!(
            "  {} ({}) signed {}",
            signature.name,
            signature.country,
            signature.submitted_at.format("%Y-%m-%d")
        );
        if let Some(comment) = &signature.comment {
            println!("    \"{comment}\"");
        }
    }

    println!("\n=== Example Complete ===");
}
