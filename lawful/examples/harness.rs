//! Registers the built-in shapes, law-checks each one on the way in, and
//! prints the resulting reports - including one deliberately unlawful
//! semigroup being refused.

use lawful::{
    check_laws, fn_eq, identity_fn, lift_fn, option_eq, payload, value_eq, vec_eq, Adapter, ArcFn,
    CapabilityKind, CheckConfig, ContainerTag, Identity, PartiallyApplied, Payload, Registry,
    SampleSet, Semigroup,
};

/// Keeps the left operand and appends the length of the right: associativity
/// genuinely breaks, unlike a plain left projection.
#[derive(Clone, Debug, PartialEq, Eq)]
struct LeftBiased(String);

impl Semigroup for LeftBiased {
    fn append(self, other: Self) -> Self {
        LeftBiased(format!("{}{}", self.0, other.0.len()))
    }
}

fn main() {
    let registry = Registry::new();
    let config = CheckConfig::default();

    let option = ContainerTag("option");
    let list = ContainerTag("list");
    let string = ContainerTag("string");
    let function = ContainerTag("function");
    let identity_box = ContainerTag("identityBox");

    let option_values = SampleSet::new()
        .value(payload(Some(payload(2i64))))
        .value(payload(None::<Payload>))
        .function(lift_fn(|n: i64| n + 1))
        .function(lift_fn(|n: i64| n * 2));
    let report = registry
        .register_checked(
            CapabilityKind::Functor,
            option,
            Adapter::functor::<Option<PartiallyApplied>>(),
            &option_values,
            option_eq::<i64>(),
            config,
        )
        .unwrap();
    print!("option {report}");

    let option_applies = SampleSet::new()
        .value(payload(Some(payload(2i64))))
        .value(payload(None::<Payload>))
        .fn_container(payload(Some(lift_fn(|n: i64| n + 1))))
        .fn_container(payload(Some(lift_fn(|n: i64| n * 2))))
        .identity_fns(payload(Some(identity_fn())));
    let report = registry
        .register_checked(
            CapabilityKind::Apply,
            option,
            Adapter::apply::<Option<PartiallyApplied>>(),
            &option_applies,
            option_eq::<i64>(),
            config,
        )
        .unwrap();
    print!("option {report}");

    let list_values = SampleSet::new()
        .value(payload(vec![payload(1i64), payload(2i64), payload(3i64)]))
        .value(payload(Vec::<Payload>::new()))
        .function(lift_fn(|n: i64| n - 7))
        .function(lift_fn(|n: i64| n * n));
    let report = registry
        .register_checked(
            CapabilityKind::Functor,
            list,
            Adapter::functor::<Vec<PartiallyApplied>>(),
            &list_values,
            vec_eq::<i64>(),
            config,
        )
        .unwrap();
    print!("list {report}");

    let strings = SampleSet::new()
        .value(payload("x".to_string()))
        .value(payload("y".to_string()))
        .value(payload("z".to_string()));
    let report = registry
        .register_checked(
            CapabilityKind::Semigroup,
            string,
            Adapter::semigroup::<String>(),
            &strings,
            value_eq::<String>(),
            config,
        )
        .unwrap();
    print!("string {report}");

    let endos = SampleSet::new()
        .value(payload(lift_fn(|n: i64| n + 1)))
        .value(payload(lift_fn(|n: i64| n * 2)))
        .value(payload(lift_fn(|n: i64| n - 3)));
    let report = registry
        .register_checked(
            CapabilityKind::Category,
            function,
            Adapter::category::<ArcFn>(),
            &endos,
            fn_eq::<i64, i64>(vec![-4, 0, 1, 7]),
            config,
        )
        .unwrap();
    print!("function {report}");

    let boxed = SampleSet::new().value(payload(11i64)).value(payload(-3i64));
    let report = registry
        .register_checked(
            CapabilityKind::Identity,
            identity_box,
            Adapter::wrapper::<Identity<PartiallyApplied>>(),
            &boxed,
            value_eq::<i64>(),
            config,
        )
        .unwrap();
    print!("identityBox {report}");

    // an unlawful adapter is caught before it can be published
    let biased = SampleSet::new()
        .value(payload(LeftBiased("x".to_string())))
        .value(payload(LeftBiased("y".to_string())))
        .value(payload(LeftBiased("z".to_string())));
    let broken = Adapter::semigroup::<LeftBiased>();
    let report = check_laws(
        CapabilityKind::Semigroup,
        &broken,
        &biased,
        value_eq::<LeftBiased>(),
        config,
    )
    .unwrap();
    print!("leftBiased {report}");
    let refused = registry
        .register_checked(
            CapabilityKind::Semigroup,
            ContainerTag("leftBiased"),
            broken,
            &biased,
            value_eq::<LeftBiased>(),
            config,
        )
        .unwrap_err();
    println!("refused: {refused}");

    // generic dispatch: callers name a tag, not a concrete container type
    println!("option supports: {:?}", registry.resolve_all(option));
    let functor = registry.resolve(CapabilityKind::Functor, option).unwrap();
    let doubled = functor
        .as_functor()
        .unwrap()
        .map(&payload(Some(payload(21i64))), &lift_fn(|n: i64| n * 2))
        .unwrap();
    let doubled = doubled.downcast_ref::<Option<Payload>>().unwrap();
    println!(
        "doubled: {:?}",
        doubled.as_ref().and_then(|p| p.downcast_ref::<i64>())
    );
}
