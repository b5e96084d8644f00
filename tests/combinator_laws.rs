#![cfg(feature = "combinator")]
//! Property-based tests for combinator laws.
//!
//! ## Identity and Constant
//! - `identity(x) == x`
//! - `always(a)(b) == a`
//!
//! ## Flip
//! - `flip(f)(a)(b) == f(b)(a)`
//! - `flip2(flip2(f))(a, b) == f(a, b)`
//!
//! ## Predicates
//! - `not(f)(x) == !f(x)`
//! - `and([p, q])(x) == p(x) && q(x)`, `or([p, q])(x) == p(x) || q(x)`
//!
//! ## Pipe
//! - `pipe([f, g])(x) == g(f(x))`
//! - `pipe!(identity, f)(x) == f(x) == pipe!(f, identity)(x)`
//!
//! ## Curry
//! - `curry(n)(f)` applied to `x1..xn` equals `f(vec![x1, .., xn])`

use fpkit::combinator::{Application, always, and, curry, flip, flip2, identity, not, or, pipe};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_identity(value in any::<i64>()) {
        prop_assert_eq!(identity(value), value);
    }

    #[test]
    fn prop_always_ignores_input(kept in any::<i32>(), ignored in ".*") {
        let constant = always(kept);
        prop_assert_eq!(constant(ignored), kept);
    }

    #[test]
    fn prop_flip_definition(first in any::<i32>(), second in any::<i32>()) {
        let subtract = |minuend: i32| move |subtrahend: i32| minuend.wrapping_sub(subtrahend);
        let flipped = flip(subtract);

        prop_assert_eq!(flipped(first)(second), subtract(second)(first));
    }

    #[test]
    fn prop_double_flip2(first in any::<i32>(), second in any::<i32>()) {
        let subtract = |minuend: i32, subtrahend: i32| minuend.wrapping_sub(subtrahend);
        let twice = flip2(flip2(subtract));

        prop_assert_eq!(twice(first, second), subtract(first, second));
    }

    #[test]
    fn prop_not_negates(value in any::<i32>()) {
        let is_negative = |candidate: &i32| *candidate < 0;
        prop_assert_eq!(not(is_negative)(&value), !is_negative(&value));
    }

    #[test]
    fn prop_and_or_match_boolean_operators(value in any::<i32>()) {
        let is_even: fn(&i32) -> bool = |candidate| candidate % 2 == 0;
        let is_positive: fn(&i32) -> bool = |candidate| *candidate > 0;

        prop_assert_eq!(and([is_even, is_positive])(&value), is_even(&value) && is_positive(&value));
        prop_assert_eq!(or([is_even, is_positive])(&value), is_even(&value) || is_positive(&value));
    }

    #[test]
    fn prop_pipe_order(value in any::<i32>()) {
        let increment: fn(i32) -> i32 = |input| input.wrapping_add(1);
        let double: fn(i32) -> i32 = |input| input.wrapping_mul(2);

        prop_assert_eq!(pipe([increment, double])(value), double(increment(value)));
    }

    #[test]
    fn prop_pipe_identity(value in any::<i32>()) {
        let double = |input: i32| input.wrapping_mul(2);

        prop_assert_eq!(fpkit::pipe!(identity, double)(value), double(value));
        prop_assert_eq!(fpkit::pipe!(double, identity)(value), double(value));
    }

    #[test]
    fn prop_curry_equivalence(arguments in prop::collection::vec(any::<i16>(), 0..8)) {
        let collect = |received: Vec<i16>| received;
        let mut application = Application::Partial(curry(arguments.len())(collect));

        if arguments.is_empty() {
            application = application.apply(0);
        }
        for argument in arguments.iter().copied() {
            application = application.apply(argument);
        }

        prop_assert_eq!(application.complete(), Some(arguments));
    }
}
