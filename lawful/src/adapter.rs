//! The erased adapter layer: capability operations over opaque payload
//! handles.
//!
//! The typed contracts in [`crate::capability`] are generic over their value
//! slots, which makes them unusable behind a runtime registry. This module
//! erases the value slot to [`Payload`] so that an adapter can be stored,
//! resolved, and law-checked without the client naming the payload type. A
//! container at this level is the shape instantiated at `Payload`, e.g.
//! `Option<Payload>` for the option shape.
//!
//! An adapter is fully constructed before it is published and immutable
//! afterwards, so shared references handed out by the registry are safe to
//! use from concurrent callers.

use std::any::Any;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::capability::{Apply, CapabilityKind, Category, Functor, Semigroup, Wrap};

/// An opaque, shared payload handle. Containers, bare semigroup values, and
/// relations are all carried as payloads at the erased level.
pub type Payload = Arc<dyn Any + Send + Sync>;

/// An erased function over payload handles, used as the element type of
/// function containers and as the relation type of the function category.
pub type PayloadFn = Arc<dyn Fn(Payload) -> Payload + Send + Sync>;

/// Place a value behind an opaque payload handle.
pub fn payload<T: Any + Send + Sync>(value: T) -> Payload {
    Arc::new(value)
}

/// The identity function as an erased payload function.
pub fn identity_fn() -> PayloadFn {
    Arc::new(|p| p)
}

/// Lift a typed function into an erased payload function.
///
/// # Panics
///
/// The returned function panics when handed a payload that does not hold an
/// `A`. Assembling a sample set whose functions disagree with its values is
/// a programmer error, not a recoverable condition.
pub fn lift_fn<A, B>(f: impl Fn(A) -> B + Send + Sync + 'static) -> PayloadFn
where
    A: Any + Clone,
    B: Any + Send + Sync,
{
    Arc::new(move |p: Payload| {
        let a = p
            .downcast_ref::<A>()
            .expect("payload type mismatch in lifted function")
            .clone();
        Arc::new(f(a)) as Payload
    })
}

/// A payload did not hold the container shape an adapter operation expected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("payload does not hold a {expected}")]
pub struct ShapeError {
    pub expected: &'static str,
}

fn downcast<T: Any + Clone>(p: &Payload, expected: &'static str) -> Result<T, ShapeError> {
    p.downcast_ref::<T>().cloned().ok_or(ShapeError { expected })
}

/// Erased [`Functor`] operations.
pub trait FunctorOps: Send + Sync {
    /// Map an erased function over an erased container.
    fn map(&self, fa: &Payload, f: &PayloadFn) -> Result<Payload, ShapeError>;
}

/// Erased [`Apply`] operations.
pub trait ApplyOps: Send + Sync {
    /// Apply an erased container of functions to an erased container of
    /// values.
    fn ap(&self, fa: &Payload, ff: &Payload) -> Result<Payload, ShapeError>;

    /// Pointwise composition of two function containers: the result holds
    /// `g . f` for every `g` drawn from `gf` and `f` drawn from `ff`, in the
    /// shape's `ap` order. This is the `map`-and-`ap` chain of the Apply
    /// composition law, evaluated in typed code.
    fn compose_fns(&self, gf: &Payload, ff: &Payload) -> Result<Payload, ShapeError>;
}

/// Erased [`Semigroup`] operations.
pub trait SemigroupOps: Send + Sync {
    fn append(&self, a: &Payload, b: &Payload) -> Result<Payload, ShapeError>;
}

/// Erased [`Category`] operations. Relations are payloads holding the
/// shape's `Hom<Payload, Payload>`.
pub trait CategoryOps: Send + Sync {
    fn identity(&self) -> Payload;
    fn compose(&self, g: &Payload, f: &Payload) -> Result<Payload, ShapeError>;
}

/// Erased [`Wrap`] operations.
pub trait WrapOps: Send + Sync {
    fn wrap(&self, a: Payload) -> Payload;
    fn unwrap(&self, fa: &Payload) -> Result<Payload, ShapeError>;
}

struct LiftFunctor<F>(PhantomData<fn() -> F>);

impl<F> FunctorOps for LiftFunctor<F>
where
    F: Functor,
    F::Of<Payload>: Any + Clone + Send + Sync,
{
    fn map(&self, fa: &Payload, f: &PayloadFn) -> Result<Payload, ShapeError> {
        let fa: F::Of<Payload> = downcast(fa, "value container")?;
        let f = Arc::clone(f);
        Ok(Arc::new(F::map(fa, move |a| (*f)(a))))
    }
}

struct LiftApply<F>(PhantomData<fn() -> F>);

impl<F> ApplyOps for LiftApply<F>
where
    F: Apply,
    F::Of<Payload>: Any + Clone + Send + Sync,
    F::Of<PayloadFn>: Any + Clone + Send + Sync,
{
    fn ap(&self, fa: &Payload, ff: &Payload) -> Result<Payload, ShapeError> {
        let fa: F::Of<Payload> = downcast(fa, "value container")?;
        let ff: F::Of<PayloadFn> = downcast(ff, "function container")?;
        let ff = F::map(ff, |g: PayloadFn| move |a: Payload| (*g)(a));
        Ok(Arc::new(F::ap(fa, ff)))
    }

    fn compose_fns(&self, gf: &Payload, ff: &Payload) -> Result<Payload, ShapeError> {
        let gf: F::Of<PayloadFn> = downcast(gf, "function container")?;
        let ff: F::Of<PayloadFn> = downcast(ff, "function container")?;
        let curried = F::map(gf, |g: PayloadFn| {
            move |f: PayloadFn| -> PayloadFn {
                let g = Arc::clone(&g);
                Arc::new(move |a| (*g)((*f)(a)))
            }
        });
        Ok(Arc::new(F::ap(ff, curried)))
    }
}

struct LiftSemigroup<T>(PhantomData<fn() -> T>);

impl<T> SemigroupOps for LiftSemigroup<T>
where
    T: Semigroup + Any + Clone + Send + Sync,
{
    fn append(&self, a: &Payload, b: &Payload) -> Result<Payload, ShapeError> {
        let a: T = downcast(a, "semigroup value")?;
        let b: T = downcast(b, "semigroup value")?;
        Ok(Arc::new(a.append(b)) as Payload)
    }
}

struct LiftCategory<C>(PhantomData<fn() -> C>);

impl<C> CategoryOps for LiftCategory<C>
where
    C: Category,
    C::Hom<Payload, Payload>: Any + Clone + Send + Sync,
{
    fn identity(&self) -> Payload {
        Arc::new(C::identity::<Payload>())
    }

    fn compose(&self, g: &Payload, f: &Payload) -> Result<Payload, ShapeError> {
        let g: C::Hom<Payload, Payload> = downcast(g, "relation")?;
        let f: C::Hom<Payload, Payload> = downcast(f, "relation")?;
        Ok(Arc::new(C::compose(g, f)))
    }
}

struct LiftWrap<W>(PhantomData<fn() -> W>);

impl<W> WrapOps for LiftWrap<W>
where
    W: Wrap,
    W::Of<Payload>: Any + Clone + Send + Sync,
{
    fn wrap(&self, a: Payload) -> Payload {
        Arc::new(W::wrap(a))
    }

    fn unwrap(&self, fa: &Payload) -> Result<Payload, ShapeError> {
        let fa: W::Of<Payload> = downcast(fa, "wrapped value")?;
        Ok(W::unwrap(fa))
    }
}

/// Binds one capability to one container shape as a set of erased
/// operations. Immutable once constructed.
///
/// Built from any typed capability impl via the lifting constructors:
///
/// ```rust
/// use lawful::{Adapter, CapabilityKind, PartiallyApplied};
///
/// let adapter = Adapter::functor::<Option<PartiallyApplied>>();
/// assert_eq!(adapter.kind(), CapabilityKind::Functor);
/// ```
pub enum Adapter {
    Functor(Arc<dyn FunctorOps>),
    Apply(Arc<dyn ApplyOps>),
    Semigroup(Arc<dyn SemigroupOps>),
    Category(Arc<dyn CategoryOps>),
    Identity(Arc<dyn WrapOps>),
}

impl fmt::Debug for Adapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Adapter::Functor(_) => "Functor",
            Adapter::Apply(_) => "Apply",
            Adapter::Semigroup(_) => "Semigroup",
            Adapter::Category(_) => "Category",
            Adapter::Identity(_) => "Identity",
        };
        f.debug_tuple(name).finish()
    }
}

impl Adapter {
    /// Lift a typed [`Functor`] impl into an erased adapter.
    pub fn functor<F>() -> Self
    where
        F: Functor + 'static,
        F::Of<Payload>: Any + Clone + Send + Sync,
    {
        Adapter::Functor(Arc::new(LiftFunctor::<F>(PhantomData)))
    }

    /// Lift a typed [`Apply`] impl into an erased adapter.
    pub fn apply<F>() -> Self
    where
        F: Apply + 'static,
        F::Of<Payload>: Any + Clone + Send + Sync,
        F::Of<PayloadFn>: Any + Clone + Send + Sync,
    {
        Adapter::Apply(Arc::new(LiftApply::<F>(PhantomData)))
    }

    /// Lift a typed [`Semigroup`] impl into an erased adapter.
    pub fn semigroup<T>() -> Self
    where
        T: Semigroup + Any + Clone + Send + Sync,
    {
        Adapter::Semigroup(Arc::new(LiftSemigroup::<T>(PhantomData)))
    }

    /// Lift a typed [`Category`] impl into an erased adapter.
    pub fn category<C>() -> Self
    where
        C: Category + 'static,
        C::Hom<Payload, Payload>: Any + Clone + Send + Sync,
    {
        Adapter::Category(Arc::new(LiftCategory::<C>(PhantomData)))
    }

    /// Lift a typed [`Wrap`] impl into an erased adapter.
    pub fn wrapper<W>() -> Self
    where
        W: Wrap + 'static,
        W::Of<Payload>: Any + Clone + Send + Sync,
    {
        Adapter::Identity(Arc::new(LiftWrap::<W>(PhantomData)))
    }

    /// The capability kind these operations implement.
    pub fn kind(&self) -> CapabilityKind {
        match self {
            Adapter::Functor(_) => CapabilityKind::Functor,
            Adapter::Apply(_) => CapabilityKind::Apply,
            Adapter::Semigroup(_) => CapabilityKind::Semigroup,
            Adapter::Category(_) => CapabilityKind::Category,
            Adapter::Identity(_) => CapabilityKind::Identity,
        }
    }

    pub fn as_functor(&self) -> Option<&dyn FunctorOps> {
        match self {
            Adapter::Functor(ops) => Some(ops.as_ref()),
            _ => None,
        }
    }

    pub fn as_apply(&self) -> Option<&dyn ApplyOps> {
        match self {
            Adapter::Apply(ops) => Some(ops.as_ref()),
            _ => None,
        }
    }

    pub fn as_semigroup(&self) -> Option<&dyn SemigroupOps> {
        match self {
            Adapter::Semigroup(ops) => Some(ops.as_ref()),
            _ => None,
        }
    }

    pub fn as_category(&self) -> Option<&dyn CategoryOps> {
        match self {
            Adapter::Category(ops) => Some(ops.as_ref()),
            _ => None,
        }
    }

    pub fn as_wrap(&self) -> Option<&dyn WrapOps> {
        match self {
            Adapter::Identity(ops) => Some(ops.as_ref()),
            _ => None,
        }
    }
}
