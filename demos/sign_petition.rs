//! Signing the Petition
//!
//! This example walks the full signature flow: failed validation with
//! every offending field reported at once, advancing through the three
//! steps, submission, and the signature landing on the wall.
//!
//! Run with: cargo run --example sign_petition
//! Set RUST_LOG=signwall=debug to see the structured trace events.

use signwall::{FieldId, SignatureStore, StepFormController};

fn main() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("signwall=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("=== Signing the Petition ===\n");

    let mut form = StepFormController::new();
    let mut wall = SignatureStore::demo();

    println!("Step {} of 3: {}", form.current_step().index(), form.current_step());

    // Trying to advance an empty form reports every offending field
    match form.advance() {
        Ok(step) => println!("  Unexpectedly advanced to {step}"),
        Err(err) => {
            println!("  Cannot advance yet: {err}");
            if let signwall::FormError::Invalid { violations } = err {
                for violation in &violations {
                    println!("    - {violation}");
                }
            }
        }
    }

    // Fill in the identity step and move on
    form.set_field(FieldId::FullName, "Lucía Prieto");
    form.set_field(FieldId::Country, "Argentina");
    let step = form.advance().expect("identity step should validate");
    println!("\nStep {} of 3: {step}", step.index());

    // Contact details are optional, but a malformed email is caught eagerly
    form.set_field(FieldId::Email, "lucia@nowhere");
    if form.validate_field(FieldId::Email).is_failure() {
        println!("  Email rejected eagerly, fixing it");
        form.set_field(FieldId::Email, "lucia@example.org");
    }
    let step = form.advance().expect("contact step should validate");
    println!("\nStep {} of 3: {step}", step.index());

    // Final step: comment and consent
    form.set_field(FieldId::Comment, "Firmo porque el lag es insoportable");
    form.set_field(FieldId::Consent, true);

    let record = form.submit().expect("all steps should validate");
    println!("\nSubmitted: {} ({})", record.name, record.country);
    println!("Form is back at step {}", form.current_step().index());

    let count = wall.add(record);
    println!("\nThe wall now holds {count} signatures:");
    for signature in wall.recent(10) {
        match &signature.comment {
            Some(comment) => println!("  {} ({}) - \"{}\"", signature.name, signature.country, comment),
            None => println!("  {} ({})", signature.name, signature.country),
        }
    }

    println!("\n=== Example Complete ===");
}
