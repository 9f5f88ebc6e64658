use lawful::{
    check_laws, fn_eq, lift_fn, payload, Adapter, ArcFn, CapabilityKind, CheckConfig, LawStatus,
    SampleSet,
};
use proptest::proptest;

use crate::samples::{affine_fn, arb_affine};

const PROBES: [i64; 5] = [-17, -1, 0, 1, 23];

fn endo_samples(fns: Vec<lawful::PayloadFn>) -> SampleSet {
    fns.into_iter().fold(SampleSet::new(), |s, f| s.value(payload(f)))
}

#[test]
fn function_category_laws_pass() {
    let adapter = Adapter::category::<ArcFn>();
    let samples = endo_samples(crate::samples::int_functions());

    let report = check_laws(
        CapabilityKind::Category,
        &adapter,
        &samples,
        fn_eq::<i64, i64>(PROBES.to_vec()),
        CheckConfig::default(),
    )
    .unwrap();

    let statuses: Vec<_> = report.outcomes.iter().map(|o| (o.law, o.status)).collect();
    assert_eq!(
        statuses,
        vec![
            ("category left identity", LawStatus::Passed),
            ("category right identity", LawStatus::Passed),
            ("category associativity", LawStatus::Passed),
        ]
    );

    // compose through the erased operation set and observe the result
    let composed = adapter
        .as_category()
        .unwrap()
        .compose(
            &payload(lift_fn(|n: i64| n * 2)),
            &payload(lift_fn(|n: i64| n + 1)),
        )
        .unwrap();
    let eq = fn_eq::<i64, i64>(PROBES.to_vec());
    assert!(eq(&composed, &payload(lift_fn(|n: i64| (n + 1) * 2))));
}

#[test]
#[should_panic(expected = "probe point")]
fn relation_equality_rejects_an_empty_probe_set() {
    // with no probe points every pair of relations would compare equal
    let _ = fn_eq::<i64, i64>(Vec::new());
}

#[test]
fn no_relations_means_vacuous() {
    let report = check_laws(
        CapabilityKind::Category,
        &Adapter::category::<ArcFn>(),
        &SampleSet::new(),
        fn_eq::<i64, i64>(PROBES.to_vec()),
        CheckConfig::default(),
    )
    .unwrap();

    assert!(report.outcomes.iter().all(|o| o.status == LawStatus::Vacuous));
}

proptest! {
    #[test]
    fn affine_endo_laws_hold(f in arb_affine(), g in arb_affine(), h in arb_affine()) {
        let samples = endo_samples(vec![affine_fn(f), affine_fn(g), affine_fn(h)]);

        let report = check_laws(
            CapabilityKind::Category,
            &Adapter::category::<ArcFn>(),
            &samples,
            fn_eq::<i64, i64>(PROBES.to_vec()),
            CheckConfig::default(),
        )
        .unwrap();

        assert!(report.all_passed());
        assert!(report.outcomes.iter().all(|o| o.status == LawStatus::Passed));
    }
}
