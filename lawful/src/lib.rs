//! Generic container capabilities (functor, apply, semigroup, category,
//! identity box) with erased adapters, an append-only registry, and a
//! sampled checker for the algebraic laws each capability carries.

mod adapter;
mod capability;
mod laws;
mod registry;
mod shapes;

pub use adapter::{
    identity_fn, lift_fn, payload, Adapter, ApplyOps, CategoryOps, FunctorOps, Payload, PayloadFn,
    SemigroupOps, ShapeError, WrapOps,
};
pub use capability::{
    Apply, CapabilityKind, Category, ContainerTag, Functor, PartiallyApplied, Semigroup, Wrap,
};
pub use laws::{
    check_laws, CheckConfig, Counterexample, LawOutcome, LawReport, LawStatus, MalformedAdapter,
    SamplePool, SampleRef, SampleSet,
};
pub use registry::{Registry, RegistryError};
pub use shapes::{fn_eq, identity_eq, option_eq, value_eq, vec_eq, ArcFn, Identity};
