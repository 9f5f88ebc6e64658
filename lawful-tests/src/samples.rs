//! Shared sample-set construction helpers and proptest strategies.

use lawful::{lift_fn, payload, Payload, PayloadFn};
use proptest::prelude::*;

/// Erase an optional int into an option-shaped payload.
pub fn int_option(x: Option<i64>) -> Payload {
    payload(x.map(payload))
}

/// Erase a slice of ints into a list-shaped payload.
pub fn int_list(xs: &[i64]) -> Payload {
    payload(xs.iter().map(|x| payload(*x)).collect::<Vec<Payload>>())
}

/// A few distinguishable int endofunctions. Wrapping arithmetic so that
/// proptest-sized inputs can't overflow.
pub fn int_functions() -> Vec<PayloadFn> {
    vec![
        lift_fn(|n: i64| n.wrapping_add(1)),
        lift_fn(|n: i64| n.wrapping_mul(2)),
        lift_fn(|n: i64| n.wrapping_sub(3)),
    ]
}

pub fn arb_ints() -> impl Strategy<Value = Vec<i64>> {
    proptest::collection::vec(any::<i64>(), 0..6)
}

/// Coefficients of an affine int endofunction, `n * a + b`.
pub fn arb_affine() -> impl Strategy<Value = (i64, i64)> {
    (-5i64..=5, -100i64..=100)
}

pub fn affine_fn((a, b): (i64, i64)) -> PayloadFn {
    lift_fn(move |n: i64| n.wrapping_mul(a).wrapping_add(b))
}
