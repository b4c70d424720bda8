//! Property-based tests for the petition core.
//!
//! These tests use proptest to verify the store, stepper, and validation
//! invariants hold across many randomly generated inputs.

use chrono::Utc;
use proptest::prelude::*;
use signwall::{
    FieldId, FieldSet, FieldViolation, SignatureRecord, SignatureStore, Step, StepFormController,
};

fn record(name: &str) -> SignatureRecord {
    SignatureRecord {
        name: name.to_string(),
        country: "España".to_string(),
        gamertag: None,
        email: None,
        comment: None,
        submitted_at: Utc::now(),
    }
}

prop_compose! {
    fn arbitrary_step()(variant in 0..3u8) -> Step {
        match variant {
            0 => Step::Identity,
            1 => Step::Contact,
            _ => Step::Consent,
        }
    }
}

prop_compose! {
    fn signer_names()(names in prop::collection::vec("[A-Za-z]{2,12}", 0..12)) -> Vec<String> {
        names
    }
}

proptest! {
    #[test]
    fn count_equals_seed_plus_adds(seeded in signer_names(), added in signer_names()) {
        let mut store = SignatureStore::new();
        store.seed(seeded.iter().map(|n| record(n)).collect());

        for name in &added {
            store.add(record(name));
        }

        prop_assert_eq!(store.count(), seeded.len() + added.len());
    }

    #[test]
    fn add_returns_the_running_count(added in signer_names()) {
        let mut store = SignatureStore::new();
        for (i, name) in added.iter().enumerate() {
            prop_assert_eq!(store.add(record(name)), i + 1);
        }
    }

    #[test]
    fn recent_is_insertion_reverse_order(added in signer_names(), n in 0usize..20) {
        let mut store = SignatureStore::new();
        for name in &added {
            store.add(record(name));
        }

        let recent = store.recent(n);
        prop_assert!(recent.len() <= n);
        prop_assert!(recent.len() <= added.len());

        // The k-th most recent is the k-th from the end of the add order
        for (k, entry) in recent.iter().enumerate() {
            prop_assert_eq!(&entry.name, &added[added.len() - 1 - k]);
        }
    }

    #[test]
    fn recent_with_large_n_is_the_whole_store(added in signer_names()) {
        let mut store = SignatureStore::new();
        for name in &added {
            store.add(record(name));
        }
        prop_assert_eq!(store.recent(usize::MAX).len(), added.len());
        prop_assert!(store.recent(0).is_empty());
    }

    #[test]
    fn fraction_of_goal_stays_clamped(added in signer_names(), goal in 0usize..50) {
        let mut store = SignatureStore::new();
        for name in &added {
            store.add(record(name));
        }

        let fraction = store.fraction_of_goal(goal);
        prop_assert!((0.0..=1.0).contains(&fraction));
        if goal > 0 && added.len() >= goal {
            prop_assert_eq!(fraction, 1.0);
        }
    }

    #[test]
    fn next_and_prev_stay_in_bounds(step in arbitrary_step()) {
        if let Some(next) = step.next() {
            prop_assert_eq!(next.index(), step.index() + 1);
        } else {
            prop_assert!(step.is_final());
        }

        if let Some(prev) = step.prev() {
            prop_assert_eq!(prev.index(), step.index() - 1);
        } else {
            prop_assert_eq!(step, Step::first());
        }
    }

    #[test]
    fn step_roundtrip_serialization(step in arbitrary_step()) {
        let json = serde_json::to_string(&step).unwrap();
        let deserialized: Step = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(step, deserialized);
    }

    #[test]
    fn names_of_two_or_more_characters_validate(name in "[A-Za-zÀ-ÿ]{2,40}") {
        let draft = FieldSet::new().with(FieldId::FullName, name.as_str());
        prop_assert!(signwall::validation::check_field(&draft, FieldId::FullName).is_success());
    }

    #[test]
    fn whitespace_padding_never_rescues_a_short_name(pad in " {0,6}", core in "[A-Za-z]") {
        let padded = format!("{pad}{core}{pad}");
        let draft = FieldSet::new().with(FieldId::FullName, padded.as_str());
        let result = signwall::validation::check_field(&draft, FieldId::FullName);
        prop_assert!(result.is_failure());
    }

    #[test]
    fn well_formed_emails_validate(
        local in "[a-z0-9]{1,8}",
        host in "[a-z0-9]{1,8}",
        tld in "[a-z]{2,4}",
    ) {
        let email = format!("{local}@{host}.{tld}");
        let draft = FieldSet::new().with(FieldId::Email, email.as_str());
        prop_assert!(signwall::validation::check_field(&draft, FieldId::Email).is_success());
    }

    #[test]
    fn dotless_domains_never_validate(local in "[a-z0-9]{1,8}", host in "[a-z0-9]{1,8}") {
        let email = format!("{local}@{host}");
        let draft = FieldSet::new().with(FieldId::Email, email.as_str());
        prop_assert!(signwall::validation::check_field(&draft, FieldId::Email).is_failure());
    }

    #[test]
    fn field_identifiers_roundtrip(variant in 0usize..6) {
        let field = FieldId::ALL[variant];
        prop_assert_eq!(field.name().parse::<FieldId>(), Ok(field));
    }

    #[test]
    fn completed_forms_always_submit_and_reset(
        name in "[A-Za-z]{2,20}",
        country in "[A-Za-z]{1,20}",
        retreats in 0usize..3,
    ) {
        let mut form = StepFormController::new();
        form.set_field(FieldId::FullName, name.as_str());
        form.set_field(FieldId::Country, country.as_str());
        form.advance().unwrap();
        form.advance().unwrap();
        form.set_field(FieldId::Consent, true);

        // Wandering back and forth must not affect submission
        for _ in 0..retreats {
            form.retreat();
            form.advance().unwrap();
        }

        let submitted = form.submit().unwrap();
        prop_assert_eq!(submitted.name, name);
        prop_assert_eq!(submitted.country, country);
        prop_assert_eq!(form.current_step(), Step::Identity);
    }

    #[test]
    fn unconsented_forms_never_submit(name in "[A-Za-z]{2,20}") {
        let mut form = StepFormController::new();
        form.set_field(FieldId::FullName, name.as_str());
        form.set_field(FieldId::Country, "Colombia");
        form.advance().unwrap();
        form.advance().unwrap();

        let err = form.submit().unwrap_err();
        match err {
            signwall::FormError::Invalid { violations } => {
                let consent_required = violations.contains(&FieldViolation::Required {
                    field: FieldId::Consent,
                });
                prop_assert!(consent_required);
            }
            other => panic!("expected Invalid, got {other:?}"),
        }
        prop_assert_eq!(form.current_step(), Step::Consent);
    }
}
