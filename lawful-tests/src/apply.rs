use lawful::{
    check_laws, identity_fn, lift_fn, option_eq, payload, vec_eq, Adapter, CapabilityKind,
    CheckConfig, LawStatus, PartiallyApplied, PayloadFn, SampleSet,
};
use proptest::proptest;

use crate::samples::{arb_ints, int_list, int_option};

fn option_apply_samples() -> SampleSet {
    SampleSet::new()
        .value(int_option(Some(2)))
        .value(int_option(None))
        .fn_container(payload(Some(lift_fn(|n: i64| n.wrapping_add(1)))))
        .fn_container(payload(Some(lift_fn(|n: i64| n.wrapping_mul(2)))))
        .fn_container(payload(None::<PayloadFn>))
        .identity_fns(payload(Some(identity_fn())))
}

#[test]
fn option_apply_laws_pass() {
    let adapter = Adapter::apply::<Option<PartiallyApplied>>();
    let report = check_laws(
        CapabilityKind::Apply,
        &adapter,
        &option_apply_samples(),
        option_eq::<i64>(),
        CheckConfig::default(),
    )
    .unwrap();

    let statuses: Vec<_> = report.outcomes.iter().map(|o| (o.law, o.status)).collect();
    assert_eq!(
        statuses,
        vec![
            ("apply identity", LawStatus::Passed),
            ("apply composition", LawStatus::Passed),
        ]
    );

    // the same adapter is directly usable through its erased operation set
    let applied = adapter
        .as_apply()
        .unwrap()
        .ap(&int_option(Some(2)), &payload(Some(lift_fn(|n: i64| n + 1))))
        .unwrap();
    assert!(option_eq::<i64>()(&applied, &int_option(Some(3))));
}

#[test]
fn missing_lifted_identity_leaves_identity_law_vacuous() {
    let mut samples = option_apply_samples();
    samples.identity_fns = None;

    let report = check_laws(
        CapabilityKind::Apply,
        &Adapter::apply::<Option<PartiallyApplied>>(),
        &samples,
        option_eq::<i64>(),
        CheckConfig::default(),
    )
    .unwrap();

    assert_eq!(report.outcomes[0].law, "apply identity");
    assert_eq!(report.outcomes[0].status, LawStatus::Vacuous);
    assert_eq!(report.outcomes[1].status, LawStatus::Passed);
}

proptest! {
    #[test]
    fn list_apply_laws_hold(xs in arb_ints(), ys in arb_ints()) {
        let samples = SampleSet::new()
            .value(int_list(&xs))
            .value(int_list(&ys))
            .fn_container(payload(vec![
                lift_fn(|n: i64| n.wrapping_add(1)),
                lift_fn(|n: i64| n.wrapping_mul(2)),
            ]))
            .fn_container(payload(vec![lift_fn(|n: i64| n.wrapping_sub(3))]))
            .fn_container(payload(Vec::<PayloadFn>::new()))
            .identity_fns(payload(vec![identity_fn()]));

        let report = check_laws(
            CapabilityKind::Apply,
            &Adapter::apply::<Vec<PartiallyApplied>>(),
            &samples,
            vec_eq::<i64>(),
            CheckConfig::default(),
        )
        .unwrap();

        assert!(report.all_passed());
        assert!(report.outcomes.iter().all(|o| o.status == LawStatus::Passed));
    }
}
