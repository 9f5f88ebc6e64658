use lawful::{
    check_laws, payload, value_eq, Adapter, CapabilityKind, CheckConfig, LawStatus, SampleRef,
    SampleSet, Semigroup,
};
use proptest::prelude::*;
use proptest::proptest;

use crate::broken::LeftBiased;

fn string_samples(values: &[&str]) -> SampleSet {
    values
        .iter()
        .fold(SampleSet::new(), |s, v| s.value(payload(v.to_string())))
}

#[test]
fn string_append_is_associative() {
    let adapter = Adapter::semigroup::<String>();
    let report = check_laws(
        CapabilityKind::Semigroup,
        &adapter,
        &string_samples(&["x", "y", "z"]),
        value_eq::<String>(),
        CheckConfig::default(),
    )
    .unwrap();

    assert_eq!(report.outcomes[0].law, "semigroup associativity");
    assert_eq!(report.outcomes[0].status, LawStatus::Passed);

    let joined = adapter
        .as_semigroup()
        .unwrap()
        .append(&payload("x".to_string()), &payload("y".to_string()))
        .unwrap();
    assert!(value_eq::<String>()(&joined, &payload("xy".to_string())));
}

#[test]
fn left_biased_append_fails_with_counterexample() {
    // left projection alone would be associative by accident; LeftBiased
    // folds in the right operand's length so the violation is observable
    let a = LeftBiased("x".to_string());
    let b = LeftBiased("y".to_string());
    let c = LeftBiased("z".to_string());
    let lhs = a.clone().append(b.clone()).append(c.clone());
    let rhs = a.clone().append(b.clone().append(c.clone()));
    assert_ne!(lhs, rhs, "sample values must genuinely expose the violation");

    let samples = SampleSet::new()
        .value(payload(a))
        .value(payload(b))
        .value(payload(c));
    let report = check_laws(
        CapabilityKind::Semigroup,
        &Adapter::semigroup::<LeftBiased>(),
        &samples,
        value_eq::<LeftBiased>(),
        CheckConfig::default(),
    )
    .unwrap();

    let outcome = &report.outcomes[0];
    assert_eq!(outcome.status, LawStatus::Failed);
    // fail-fast: the first drawn triple already breaks associativity
    assert_eq!(
        outcome.counterexamples,
        vec![lawful::Counterexample {
            inputs: vec![SampleRef::value(0), SampleRef::value(0), SampleRef::value(0)],
        }]
    );
}

#[test]
fn collect_all_reports_every_failing_triple() {
    let samples = SampleSet::new()
        .value(payload(LeftBiased("x".to_string())))
        .value(payload(LeftBiased("y".to_string())));
    let config = CheckConfig {
        collect_all: true,
        ..CheckConfig::default()
    };

    let report = check_laws(
        CapabilityKind::Semigroup,
        &Adapter::semigroup::<LeftBiased>(),
        &samples,
        value_eq::<LeftBiased>(),
        config,
    )
    .unwrap();

    // every triple of one-character values breaks the law the same way
    assert_eq!(report.outcomes[0].counterexamples.len(), 8);
}

proptest! {
    #[test]
    fn string_associativity_holds(a in ".{0,8}", b in ".{0,8}", c in ".{0,8}") {
        let report = check_laws(
            CapabilityKind::Semigroup,
            &Adapter::semigroup::<String>(),
            &string_samples(&[&a, &b, &c]),
            value_eq::<String>(),
            CheckConfig::default(),
        )
        .unwrap();

        prop_assert_eq!(report.outcomes[0].status, LawStatus::Passed);
    }

    #[test]
    fn int_list_associativity_holds(
        a in proptest::collection::vec(any::<i64>(), 0..5),
        b in proptest::collection::vec(any::<i64>(), 0..5),
        c in proptest::collection::vec(any::<i64>(), 0..5),
    ) {
        let samples = SampleSet::new()
            .value(payload(a))
            .value(payload(b))
            .value(payload(c));
        let report = check_laws(
            CapabilityKind::Semigroup,
            &Adapter::semigroup::<Vec<i64>>(),
            &samples,
            value_eq::<Vec<i64>>(),
            CheckConfig::default(),
        )
        .unwrap();

        prop_assert_eq!(report.outcomes[0].status, LawStatus::Passed);
    }
}
