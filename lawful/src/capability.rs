//! Capability contracts: the operation signatures a container shape may
//! support, independent of any concrete shape.
//!
//! Each trait here is a pure contract - signatures plus documented laws. No
//! implementation lives in this module; concrete bindings are in
//! [`crate::shapes`]. The laws themselves are not (and cannot be) enforced by
//! the compiler; they are exercised by sampling in [`crate::laws`].

use std::fmt;

/// An uninhabited type used to implement capability traits for
/// partially-applied container types.
///
/// A capability for `Option<A>` cannot be written over the partially-applied
/// type `Option`, because rust does not allow implementing a trait for a
/// partially applied type. Instead the instance is written over
/// `Option<PartiallyApplied>`, with the real value slot reintroduced by the
/// trait's GAT.
#[derive(Clone, Debug)]
pub enum PartiallyApplied {}

/// Identifies which operation contract an adapter implements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CapabilityKind {
    Functor,
    Apply,
    Semigroup,
    Category,
    Identity,
}

impl CapabilityKind {
    pub fn name(self) -> &'static str {
        match self {
            CapabilityKind::Functor => "functor",
            CapabilityKind::Apply => "apply",
            CapabilityKind::Semigroup => "semigroup",
            CapabilityKind::Category => "category",
            CapabilityKind::Identity => "identity",
        }
    }
}

impl fmt::Display for CapabilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Stable identifier for a concrete container shape, used as a registry key.
///
/// The tag names the shape ("option", "list", ...), not the payload type it
/// holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContainerTag(pub &'static str);

impl fmt::Display for ContainerTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A one-slot container that supports mapping a function over its contents.
///
/// # Laws
///
/// - identity: `map(x, |a| a) == x`
/// - composition: `map(map(x, f), g) == map(x, |a| g(f(a)))`
///
/// # Implementing this trait
///
/// Implemented for a partially-applied marker, with [`PartiallyApplied`]
/// filling the value slot:
///
/// ```rust
/// use lawful::{Functor, PartiallyApplied};
///
/// # #[derive(Debug, PartialEq, Eq)]
/// enum MyOption<A> {
///     Some(A),
///     None,
/// }
///
/// impl Functor for MyOption<PartiallyApplied> {
///     type Of<X> = MyOption<X>;
///
///     fn map<A, B>(fa: Self::Of<A>, mut f: impl FnMut(A) -> B) -> Self::Of<B> {
///         match fa {
///             MyOption::Some(a) => MyOption::Some(f(a)),
///             MyOption::None => MyOption::None,
///         }
///     }
/// }
///
/// let mapped = MyOption::<PartiallyApplied>::map(MyOption::Some(1), |n| n + 10);
/// assert_eq!(mapped, MyOption::Some(11));
/// ```
pub trait Functor {
    /// the container type this capability is defined over
    type Of<X>;

    /// Apply `f` to each value slot of the container.
    fn map<A, B>(fa: Self::Of<A>, f: impl FnMut(A) -> B) -> Self::Of<B>;
}

/// A [`Functor`] that can additionally apply a container of functions to a
/// container of values.
///
/// # Laws
///
/// - identity: `ap(x, lift(|a| a)) == x`, where `lift` places the identity
///   function in the shape's "minimal" container
/// - composition: `ap(x, pointwise_compose(u, v)) == ap(ap(x, v), u)`, where
///   `pointwise_compose(u, v) = ap(v, map(u, |g| |f| g . f))`
///
/// `A: Clone` because a shape may pair every function with every value
/// (list-like shapes).
pub trait Apply: Functor {
    fn ap<A: Clone, B, F: Fn(A) -> B>(fa: Self::Of<A>, ff: Self::Of<F>) -> Self::Of<B>;
}

/// A type with an associative combining operation.
///
/// # Laws
///
/// - associativity: `append(append(a, b), c) == append(a, append(b, c))`
pub trait Semigroup {
    fn append(self, other: Self) -> Self;
}

/// A two-slot container (a relation from `A` to `B`) with identities, closed
/// under composition.
///
/// # Laws
///
/// - left identity: `compose(identity(), f) == f`
/// - right identity: `compose(f, identity()) == f`
/// - associativity: `compose(compose(f, g), h) == compose(f, compose(g, h))`
///
/// `'static` bounds on the slots allow relation types that erase to trait
/// objects, e.g. `Arc<dyn Fn(A) -> B>`.
pub trait Category {
    /// the relation type, parameterized by source and target
    type Hom<A: 'static, B: 'static>;

    fn identity<A: 'static>() -> Self::Hom<A, A>;

    /// Compose two relations, `g` after `f`.
    fn compose<A: 'static, B: 'static, C: 'static>(
        g: Self::Hom<B, C>,
        f: Self::Hom<A, B>,
    ) -> Self::Hom<A, C>;
}

/// A container holding exactly one exclusively-owned value, which can be
/// wrapped and unwrapped without loss.
///
/// This is the `Identity` capability: the "boxed value" shape that other
/// capabilities degenerate to when the container adds no structure.
///
/// # Laws
///
/// - round trip: `unwrap(wrap(a)) == a`
pub trait Wrap {
    /// the container type this capability is defined over
    type Of<X>;

    fn wrap<A>(a: A) -> Self::Of<A>;
    fn unwrap<A>(fa: Self::Of<A>) -> A;
}
