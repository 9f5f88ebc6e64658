//! Concrete container adapters: bindings of the capability contracts to
//! specific container shapes.
//!
//! Each binding is polymorphic over its value slot only - no impl here
//! special-cases a payload type. Also provides injected-equality helpers for
//! comparing erased containers of the built-in shapes, since structural
//! equality over [`Payload`](crate::adapter::Payload) cannot be assumed.

use std::any::Any;
use std::sync::Arc;

use crate::adapter::{payload, Payload, PayloadFn};
use crate::capability::{Apply, Category, Functor, PartiallyApplied, Semigroup, Wrap};

impl Functor for Option<PartiallyApplied> {
    type Of<X> = Option<X>;

    fn map<A, B>(fa: Self::Of<A>, f: impl FnMut(A) -> B) -> Self::Of<B> {
        fa.map(f)
    }
}

impl Apply for Option<PartiallyApplied> {
    fn ap<A: Clone, B, F: Fn(A) -> B>(fa: Self::Of<A>, ff: Self::Of<F>) -> Self::Of<B> {
        match (fa, ff) {
            (Some(a), Some(f)) => Some(f(a)),
            _ => None,
        }
    }
}

impl Functor for Vec<PartiallyApplied> {
    type Of<X> = Vec<X>;

    fn map<A, B>(fa: Self::Of<A>, f: impl FnMut(A) -> B) -> Self::Of<B> {
        fa.into_iter().map(f).collect()
    }
}

impl Apply for Vec<PartiallyApplied> {
    /// Pairs every function with every value, functions outermost. The
    /// composition law only holds if this ordering is consistent, so it must
    /// not change.
    fn ap<A: Clone, B, F: Fn(A) -> B>(fa: Self::Of<A>, ff: Self::Of<F>) -> Self::Of<B> {
        let mut out = Vec::with_capacity(fa.len() * ff.len());
        for f in &ff {
            for a in &fa {
                out.push(f(a.clone()));
            }
        }
        out
    }
}

/// The identity box: a container that adds no structure around its single
/// value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Identity<A>(pub A);

impl Functor for Identity<PartiallyApplied> {
    type Of<X> = Identity<X>;

    fn map<A, B>(fa: Self::Of<A>, mut f: impl FnMut(A) -> B) -> Self::Of<B> {
        Identity(f(fa.0))
    }
}

impl Apply for Identity<PartiallyApplied> {
    fn ap<A: Clone, B, F: Fn(A) -> B>(fa: Self::Of<A>, ff: Self::Of<F>) -> Self::Of<B> {
        Identity((ff.0)(fa.0))
    }
}

impl Wrap for Identity<PartiallyApplied> {
    type Of<X> = Identity<X>;

    fn wrap<A>(a: A) -> Self::Of<A> {
        Identity(a)
    }

    fn unwrap<A>(fa: Self::Of<A>) -> A {
        fa.0
    }
}

/// Marker for the category whose relations are shared function values.
pub enum ArcFn {}

impl Category for ArcFn {
    type Hom<A: 'static, B: 'static> = Arc<dyn Fn(A) -> B + Send + Sync>;

    fn identity<A: 'static>() -> Self::Hom<A, A> {
        Arc::new(|a| a)
    }

    fn compose<A: 'static, B: 'static, C: 'static>(
        g: Self::Hom<B, C>,
        f: Self::Hom<A, B>,
    ) -> Self::Hom<A, C> {
        Arc::new(move |a| (*g)((*f)(a)))
    }
}

impl Semigroup for String {
    fn append(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<A> Semigroup for Vec<A> {
    fn append(mut self, mut other: Self) -> Self {
        Vec::append(&mut self, &mut other);
        self
    }
}

impl<A: Semigroup> Semigroup for Option<A> {
    fn append(self, other: Self) -> Self {
        match (self, other) {
            (Some(a), Some(b)) => Some(a.append(b)),
            (a, None) => a,
            (None, b) => b,
        }
    }
}

/// Equality over bare payloads of type `T`. Payloads of any other type
/// compare unequal.
pub fn value_eq<T: Any + PartialEq>() -> impl Fn(&Payload, &Payload) -> bool {
    |a, b| match (a.downcast_ref::<T>(), b.downcast_ref::<T>()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Equality over erased option containers whose elements are payloads of
/// type `T`.
pub fn option_eq<T: Any + PartialEq>() -> impl Fn(&Payload, &Payload) -> bool {
    |a, b| match (a.downcast_ref::<Option<Payload>>(), b.downcast_ref::<Option<Payload>>()) {
        (Some(Some(a)), Some(Some(b))) => match (a.downcast_ref::<T>(), b.downcast_ref::<T>()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        },
        (Some(None), Some(None)) => true,
        _ => false,
    }
}

/// Equality over erased list containers whose elements are payloads of
/// type `T`.
pub fn vec_eq<T: Any + PartialEq>() -> impl Fn(&Payload, &Payload) -> bool {
    |a, b| match (a.downcast_ref::<Vec<Payload>>(), b.downcast_ref::<Vec<Payload>>()) {
        (Some(a), Some(b)) => {
            a.len() == b.len()
                && a.iter().zip(b.iter()).all(|(a, b)| {
                    match (a.downcast_ref::<T>(), b.downcast_ref::<T>()) {
                        (Some(a), Some(b)) => a == b,
                        _ => false,
                    }
                })
        }
        _ => false,
    }
}

/// Equality over erased identity boxes whose element is a payload of
/// type `T`.
pub fn identity_eq<T: Any + PartialEq>() -> impl Fn(&Payload, &Payload) -> bool {
    |a, b| match (a.downcast_ref::<Identity<Payload>>(), b.downcast_ref::<Identity<Payload>>()) {
        (Some(a), Some(b)) => match (a.0.downcast_ref::<T>(), b.0.downcast_ref::<T>()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        },
        _ => false,
    }
}

/// Extensional equality over erased [`ArcFn`] relations: two relations are
/// equal if they agree on every probe point.
///
/// Relations wrapping non-comparable closures can only be compared by
/// observation, so the caller supplies the probe points. `A` is the
/// relations' source type, `B` their target type.
///
/// # Panics
///
/// Panics when `points` is empty: with nothing to observe, every pair of
/// relations would compare equal and law violations would go unseen.
pub fn fn_eq<A, B>(points: Vec<A>) -> impl Fn(&Payload, &Payload) -> bool
where
    A: Any + Clone + Send + Sync,
    B: Any + PartialEq,
{
    assert!(!points.is_empty(), "relation equality needs at least one probe point");
    move |f, g| {
        let (f, g) = match (f.downcast_ref::<PayloadFn>(), g.downcast_ref::<PayloadFn>()) {
            (Some(f), Some(g)) => (f, g),
            _ => return false,
        };
        points.iter().all(|p| {
            let fp = (**f)(payload(p.clone()));
            let gp = (**g)(payload(p.clone()));
            match (fp.downcast_ref::<B>(), gp.downcast_ref::<B>()) {
                (Some(fp), Some(gp)) => fp == gp,
                _ => false,
            }
        })
    }
}
