//! Deliberately unlawful adapters, used to prove the checker actually
//! catches violations rather than rubber-stamping whatever it is handed.

use lawful::{Functor, PartiallyApplied, Semigroup};

/// Keeps the left operand and appends the length of the right operand.
///
/// A plain left projection (`append(a, b) = a`) is associative by accident -
/// both sides collapse to `a`. Mixing in the right operand's length makes
/// the bias observable: `append(append(x, y), z)` sees `z` after one append,
/// `append(x, append(y, z))` sees the combined right side at once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeftBiased(pub String);

impl Semigroup for LeftBiased {
    fn append(self, other: Self) -> Self {
        LeftBiased(format!("{}{}", self.0, other.0.len()))
    }
}

/// A list-like container whose `map` reverses element order, violating the
/// functor identity law for any container with two or more elements.
#[derive(Clone, Debug)]
pub struct Backwards<A>(pub Vec<A>);

impl Functor for Backwards<PartiallyApplied> {
    type Of<X> = Backwards<X>;

    fn map<A, B>(fa: Self::Of<A>, f: impl FnMut(A) -> B) -> Self::Of<B> {
        Backwards(fa.0.into_iter().rev().map(f).collect())
    }
}
