use lawful::{
    lift_fn, payload, value_eq, vec_eq, Adapter, CapabilityKind, CheckConfig, ContainerTag,
    LawStatus, PartiallyApplied, Registry, RegistryError, SampleSet,
};

use crate::broken::LeftBiased;
use crate::samples::{int_functions, int_list};

#[test]
fn register_checked_publishes_a_lawful_adapter() {
    let registry = Registry::new();
    let tag = ContainerTag("list");
    let mut samples = SampleSet::new().value(int_list(&[1, 2, 3]));
    for f in int_functions() {
        samples = samples.function(f);
    }

    let report = registry
        .register_checked(
            CapabilityKind::Functor,
            tag,
            Adapter::functor::<Vec<PartiallyApplied>>(),
            &samples,
            vec_eq::<i64>(),
            CheckConfig::default(),
        )
        .unwrap();

    assert!(report.all_passed());
    let adapter = registry.resolve(CapabilityKind::Functor, tag).unwrap();
    let mapped = adapter
        .as_functor()
        .unwrap()
        .map(&int_list(&[4, 5]), &lift_fn(|n: i64| n * 10))
        .unwrap();
    assert!(vec_eq::<i64>()(&mapped, &int_list(&[40, 50])));
}

#[test]
fn register_checked_refuses_an_unlawful_adapter() {
    let registry = Registry::new();
    let tag = ContainerTag("leftBiased");
    let samples = SampleSet::new()
        .value(payload(LeftBiased("x".to_string())))
        .value(payload(LeftBiased("y".to_string())))
        .value(payload(LeftBiased("z".to_string())));

    let err = registry
        .register_checked(
            CapabilityKind::Semigroup,
            tag,
            Adapter::semigroup::<LeftBiased>(),
            &samples,
            value_eq::<LeftBiased>(),
            CheckConfig::default(),
        )
        .unwrap_err();

    assert_eq!(
        err,
        RegistryError::LawsFailed {
            kind: CapabilityKind::Semigroup,
            tag,
            failed: 1,
        }
    );
    // the refused adapter must not have been published
    assert!(registry.resolve(CapabilityKind::Semigroup, tag).is_err());
}

#[test]
fn register_checked_accepts_vacuous_reports() {
    // an empty sample set verifies nothing, but it also fails nothing; the
    // report keeps the distinction visible
    let registry = Registry::new();
    let tag = ContainerTag("string");

    let report = registry
        .register_checked(
            CapabilityKind::Semigroup,
            tag,
            Adapter::semigroup::<String>(),
            &SampleSet::new(),
            value_eq::<String>(),
            CheckConfig::default(),
        )
        .unwrap();

    assert!(report.outcomes.iter().all(|o| o.status == LawStatus::Vacuous));
    assert!(registry.resolve(CapabilityKind::Semigroup, tag).is_ok());
}

#[test]
fn concurrent_registration_of_distinct_keys() {
    let registry = Registry::new();
    let tags = ["a", "b", "c", "d", "e"];

    std::thread::scope(|scope| {
        for tag in tags {
            let registry = &registry;
            scope.spawn(move || {
                registry
                    .register(
                        CapabilityKind::Functor,
                        ContainerTag(tag),
                        Adapter::functor::<Option<PartiallyApplied>>(),
                    )
                    .unwrap();
            });
        }
    });

    for tag in tags {
        assert!(registry.resolve(CapabilityKind::Functor, ContainerTag(tag)).is_ok());
    }
}
