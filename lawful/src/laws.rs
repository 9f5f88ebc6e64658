//! Sampled verification of the algebraic laws attached to each capability.
//!
//! Laws are equational properties with no compiler enforcement, so they are
//! checked empirically: draw bounded combinations from a caller-supplied
//! [`SampleSet`], evaluate both sides of each equation through the adapter's
//! erased operations, and compare with a caller-supplied equality predicate.
//! A failed law is routine data, not an error - an adapter under development
//! is expected to fail laws sometimes.

use std::fmt;
use std::sync::Arc;

use crate::adapter::{
    identity_fn, Adapter, ApplyOps, CategoryOps, FunctorOps, Payload, PayloadFn, SemigroupOps,
    WrapOps,
};
use crate::capability::CapabilityKind;

/// A finite ordered collection of representative inputs used to exercise
/// laws, supplied by the caller per container shape.
///
/// Which pools a law draws from depends on the capability kind:
///
/// - Functor: `values` (erased containers) and `functions`
/// - Apply: `values`, `fn_containers` (erased containers of [`PayloadFn`]),
///   and `identity_fns` (the shape's lift of the identity function - without
///   it the Apply identity law cannot be phrased and is reported vacuous)
/// - Semigroup: `values` (bare erased values)
/// - Category: `values` (erased relations; these must be composable end to
///   end, so endo-relations over a single type are the usual choice)
/// - Identity: `values` (bare erased values)
#[derive(Clone, Default)]
pub struct SampleSet {
    pub values: Vec<Payload>,
    pub functions: Vec<PayloadFn>,
    pub fn_containers: Vec<Payload>,
    pub identity_fns: Option<Payload>,
}

impl SampleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(mut self, v: Payload) -> Self {
        self.values.push(v);
        self
    }

    pub fn function(mut self, f: PayloadFn) -> Self {
        self.functions.push(f);
        self
    }

    pub fn fn_container(mut self, c: Payload) -> Self {
        self.fn_containers.push(c);
        self
    }

    pub fn identity_fns(mut self, c: Payload) -> Self {
        self.identity_fns = Some(c);
        self
    }
}

/// Bounds and failure policy for one law-checking run.
#[derive(Clone, Copy, Debug)]
pub struct CheckConfig {
    /// Upper bound on samples drawn from each pool, keeping a k-ary law at
    /// O(max_samples^k) evaluations.
    pub max_samples: usize,
    /// Collect every failing combination instead of stopping a law at its
    /// first failure.
    pub collect_all: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        CheckConfig {
            max_samples: 8,
            collect_all: false,
        }
    }
}

/// Outcome of checking a single law.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LawStatus {
    Passed,
    Failed,
    /// No applicable samples were available, so the law was never actually
    /// exercised. Distinct from [`LawStatus::Passed`] so callers can tell
    /// "verified" from "untested".
    Vacuous,
}

impl fmt::Display for LawStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LawStatus::Passed => "passed",
            LawStatus::Failed => "FAILED",
            LawStatus::Vacuous => "vacuous",
        })
    }
}

/// Which [`SampleSet`] pool a counterexample input was drawn from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SamplePool {
    Values,
    Functions,
    FnContainers,
    IdentityFns,
}

impl SamplePool {
    fn name(self) -> &'static str {
        match self {
            SamplePool::Values => "values",
            SamplePool::Functions => "functions",
            SamplePool::FnContainers => "fn_containers",
            SamplePool::IdentityFns => "identity_fns",
        }
    }
}

/// One input of a failing combination, identified by pool and index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SampleRef {
    pub pool: SamplePool,
    pub index: usize,
}

impl SampleRef {
    pub fn value(index: usize) -> Self {
        SampleRef { pool: SamplePool::Values, index }
    }

    pub fn function(index: usize) -> Self {
        SampleRef { pool: SamplePool::Functions, index }
    }

    pub fn fn_container(index: usize) -> Self {
        SampleRef { pool: SamplePool::FnContainers, index }
    }

    pub fn identity_fns() -> Self {
        SampleRef { pool: SamplePool::IdentityFns, index: 0 }
    }
}

impl fmt::Display for SampleRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.pool.name(), self.index)
    }
}

/// The first (or, with `collect_all`, each) combination of samples for which
/// both sides of a law disagreed, in the order the law's arguments are
/// drawn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Counterexample {
    pub inputs: Vec<SampleRef>,
}

impl fmt::Display for Counterexample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, input) in self.inputs.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{input}")?;
        }
        write!(f, ")")
    }
}

/// Result of checking one named law.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LawOutcome {
    pub law: &'static str,
    pub status: LawStatus,
    /// Empty unless the status is [`LawStatus::Failed`]; the first entry is
    /// the minimal counterexample under the sample ordering.
    pub counterexamples: Vec<Counterexample>,
}

impl fmt::Display for LawOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.law, self.status)?;
        if let Some(first) = self.counterexamples.first() {
            write!(f, " at {first}")?;
        }
        Ok(())
    }
}

/// Ordered outcomes of every law associated with one capability kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LawReport {
    pub kind: CapabilityKind,
    pub outcomes: Vec<LawOutcome>,
}

impl LawReport {
    /// True when no law failed. Vacuous laws do not count as failures; use
    /// the per-outcome status to distinguish verified from untested.
    pub fn all_passed(&self) -> bool {
        !self.outcomes.iter().any(|o| o.status == LawStatus::Failed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &LawOutcome> {
        self.outcomes.iter().filter(|o| o.status == LawStatus::Failed)
    }
}

impl fmt::Display for LawReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} laws:", self.kind)?;
        for outcome in &self.outcomes {
            writeln!(f, "  {outcome}")?;
        }
        Ok(())
    }
}

/// An adapter's operations do not match the capability kind it was declared
/// under. This is a programmer error and is surfaced immediately, never
/// deferred to sampling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("adapter provides {provided} operations, expected {expected}")]
pub struct MalformedAdapter {
    pub expected: CapabilityKind,
    pub provided: CapabilityKind,
}

/// Evaluate every law associated with `kind` against `adapter`, drawing
/// bounded combinations from `samples` and comparing sides with `eq`.
///
/// Equality is injected because containers may wrap non-comparable payloads;
/// see the helpers in [`crate::shapes`]. An operation error on a drawn
/// combination (an adapter failing on well-formed input) counts as a law
/// failure.
///
/// ```rust
/// use lawful::{
///     check_laws, lift_fn, option_eq, payload, Adapter, CapabilityKind, CheckConfig,
///     PartiallyApplied, Payload, SampleSet,
/// };
///
/// let adapter = Adapter::functor::<Option<PartiallyApplied>>();
/// let samples = SampleSet::new()
///     .value(payload(Some(payload(2i64))))
///     .value(payload(None::<Payload>))
///     .function(lift_fn(|n: i64| n + 1))
///     .function(lift_fn(|n: i64| n * 2));
/// let report = check_laws(
///     CapabilityKind::Functor,
///     &adapter,
///     &samples,
///     option_eq::<i64>(),
///     CheckConfig::default(),
/// )
/// .unwrap();
/// assert!(report.all_passed());
/// ```
pub fn check_laws(
    kind: CapabilityKind,
    adapter: &Adapter,
    samples: &SampleSet,
    eq: impl Fn(&Payload, &Payload) -> bool,
    config: CheckConfig,
) -> Result<LawReport, MalformedAdapter> {
    let outcomes = match (kind, adapter) {
        (CapabilityKind::Functor, Adapter::Functor(ops)) => {
            functor_laws(ops.as_ref(), samples, &eq, config)
        }
        (CapabilityKind::Apply, Adapter::Apply(ops)) => {
            apply_laws(ops.as_ref(), samples, &eq, config)
        }
        (CapabilityKind::Semigroup, Adapter::Semigroup(ops)) => {
            semigroup_laws(ops.as_ref(), samples, &eq, config)
        }
        (CapabilityKind::Category, Adapter::Category(ops)) => {
            category_laws(ops.as_ref(), samples, &eq, config)
        }
        (CapabilityKind::Identity, Adapter::Identity(ops)) => {
            wrap_laws(ops.as_ref(), samples, &eq, config)
        }
        _ => {
            return Err(MalformedAdapter {
                expected: kind,
                provided: adapter.kind(),
            })
        }
    };
    Ok(LawReport { kind, outcomes })
}

/// Accumulates evaluated combinations for one law, fail-fast unless the
/// config says to collect everything.
struct LawRun {
    name: &'static str,
    collect_all: bool,
    tested: bool,
    failures: Vec<Counterexample>,
}

impl LawRun {
    fn new(name: &'static str, config: CheckConfig) -> Self {
        LawRun {
            name,
            collect_all: config.collect_all,
            tested: false,
            failures: Vec::new(),
        }
    }

    /// Record one evaluated combination; returns false once checking this
    /// law should stop.
    fn observe(&mut self, holds: bool, inputs: Vec<SampleRef>) -> bool {
        self.tested = true;
        if !holds {
            self.failures.push(Counterexample { inputs });
            return self.collect_all;
        }
        true
    }

    fn finish(self) -> LawOutcome {
        let status = if !self.tested {
            LawStatus::Vacuous
        } else if self.failures.is_empty() {
            LawStatus::Passed
        } else {
            LawStatus::Failed
        };
        LawOutcome {
            law: self.name,
            status,
            counterexamples: self.failures,
        }
    }
}

fn compose_payload_fns(g: &PayloadFn, f: &PayloadFn) -> PayloadFn {
    let g = Arc::clone(g);
    let f = Arc::clone(f);
    Arc::new(move |a| (*g)((*f)(a)))
}

fn both_eq(
    lhs: Result<Payload, crate::adapter::ShapeError>,
    rhs: Result<Payload, crate::adapter::ShapeError>,
    eq: &impl Fn(&Payload, &Payload) -> bool,
) -> bool {
    match (lhs, rhs) {
        (Ok(lhs), Ok(rhs)) => eq(&lhs, &rhs),
        _ => false,
    }
}

fn functor_laws(
    ops: &dyn FunctorOps,
    s: &SampleSet,
    eq: &impl Fn(&Payload, &Payload) -> bool,
    config: CheckConfig,
) -> Vec<LawOutcome> {
    let n = config.max_samples;
    let id = identity_fn();

    let mut identity = LawRun::new("functor identity", config);
    for (i, x) in s.values.iter().take(n).enumerate() {
        let holds = match ops.map(x, &id) {
            Ok(mapped) => eq(&mapped, x),
            Err(_) => false,
        };
        if !identity.observe(holds, vec![SampleRef::value(i)]) {
            break;
        }
    }

    let mut composition = LawRun::new("functor composition", config);
    'composition: for (i, x) in s.values.iter().take(n).enumerate() {
        for (j, f) in s.functions.iter().take(n).enumerate() {
            for (k, g) in s.functions.iter().take(n).enumerate() {
                let lhs = ops.map(x, f).and_then(|fx| ops.map(&fx, g));
                let rhs = ops.map(x, &compose_payload_fns(g, f));
                let holds = both_eq(lhs, rhs, eq);
                let inputs = vec![SampleRef::value(i), SampleRef::function(j), SampleRef::function(k)];
                if !composition.observe(holds, inputs) {
                    break 'composition;
                }
            }
        }
    }

    vec![identity.finish(), composition.finish()]
}

fn apply_laws(
    ops: &dyn ApplyOps,
    s: &SampleSet,
    eq: &impl Fn(&Payload, &Payload) -> bool,
    config: CheckConfig,
) -> Vec<LawOutcome> {
    let n = config.max_samples;

    // ap(x, lift(id)) == x. Apply alone has no way to place a function in a
    // container, so the lifted identity comes from the sample set; without
    // it this law stays vacuous.
    let mut identity = LawRun::new("apply identity", config);
    if let Some(idc) = &s.identity_fns {
        for (i, x) in s.values.iter().take(n).enumerate() {
            let holds = match ops.ap(x, idc) {
                Ok(applied) => eq(&applied, x),
                Err(_) => false,
            };
            if !identity.observe(holds, vec![SampleRef::value(i), SampleRef::identity_fns()]) {
                break;
            }
        }
    }

    let mut composition = LawRun::new("apply composition", config);
    'composition: for (i, x) in s.values.iter().take(n).enumerate() {
        for (j, u) in s.fn_containers.iter().take(n).enumerate() {
            for (k, v) in s.fn_containers.iter().take(n).enumerate() {
                let lhs = ops.compose_fns(u, v).and_then(|uv| ops.ap(x, &uv));
                let rhs = ops.ap(x, v).and_then(|vx| ops.ap(&vx, u));
                let holds = both_eq(lhs, rhs, eq);
                let inputs = vec![
                    SampleRef::value(i),
                    SampleRef::fn_container(j),
                    SampleRef::fn_container(k),
                ];
                if !composition.observe(holds, inputs) {
                    break 'composition;
                }
            }
        }
    }

    vec![identity.finish(), composition.finish()]
}

fn semigroup_laws(
    ops: &dyn SemigroupOps,
    s: &SampleSet,
    eq: &impl Fn(&Payload, &Payload) -> bool,
    config: CheckConfig,
) -> Vec<LawOutcome> {
    let n = config.max_samples;

    let mut associativity = LawRun::new("semigroup associativity", config);
    'associativity: for (i, a) in s.values.iter().take(n).enumerate() {
        for (j, b) in s.values.iter().take(n).enumerate() {
            for (k, c) in s.values.iter().take(n).enumerate() {
                let lhs = ops.append(a, b).and_then(|ab| ops.append(&ab, c));
                let rhs = ops.append(b, c).and_then(|bc| ops.append(a, &bc));
                let holds = both_eq(lhs, rhs, eq);
                let inputs = vec![SampleRef::value(i), SampleRef::value(j), SampleRef::value(k)];
                if !associativity.observe(holds, inputs) {
                    break 'associativity;
                }
            }
        }
    }

    vec![associativity.finish()]
}

fn category_laws(
    ops: &dyn CategoryOps,
    s: &SampleSet,
    eq: &impl Fn(&Payload, &Payload) -> bool,
    config: CheckConfig,
) -> Vec<LawOutcome> {
    let n = config.max_samples;
    let id = ops.identity();

    let mut left_identity = LawRun::new("category left identity", config);
    for (i, f) in s.values.iter().take(n).enumerate() {
        let holds = match ops.compose(&id, f) {
            Ok(composed) => eq(&composed, f),
            Err(_) => false,
        };
        if !left_identity.observe(holds, vec![SampleRef::value(i)]) {
            break;
        }
    }

    let mut right_identity = LawRun::new("category right identity", config);
    for (i, f) in s.values.iter().take(n).enumerate() {
        let holds = match ops.compose(f, &id) {
            Ok(composed) => eq(&composed, f),
            Err(_) => false,
        };
        if !right_identity.observe(holds, vec![SampleRef::value(i)]) {
            break;
        }
    }

    let mut associativity = LawRun::new("category associativity", config);
    'associativity: for (i, f) in s.values.iter().take(n).enumerate() {
        for (j, g) in s.values.iter().take(n).enumerate() {
            for (k, h) in s.values.iter().take(n).enumerate() {
                let lhs = ops.compose(f, g).and_then(|fg| ops.compose(&fg, h));
                let rhs = ops.compose(g, h).and_then(|gh| ops.compose(f, &gh));
                let holds = both_eq(lhs, rhs, eq);
                let inputs = vec![SampleRef::value(i), SampleRef::value(j), SampleRef::value(k)];
                if !associativity.observe(holds, inputs) {
                    break 'associativity;
                }
            }
        }
    }

    vec![left_identity.finish(), right_identity.finish(), associativity.finish()]
}

fn wrap_laws(
    ops: &dyn WrapOps,
    s: &SampleSet,
    eq: &impl Fn(&Payload, &Payload) -> bool,
    config: CheckConfig,
) -> Vec<LawOutcome> {
    let n = config.max_samples;

    let mut round_trip = LawRun::new("wrap round trip", config);
    for (i, a) in s.values.iter().take(n).enumerate() {
        let holds = match ops.unwrap(&ops.wrap(Arc::clone(a))) {
            Ok(b) => eq(&b, a),
            Err(_) => false,
        };
        if !round_trip.observe(holds, vec![SampleRef::value(i)]) {
            break;
        }
    }

    vec![round_trip.finish()]
}
