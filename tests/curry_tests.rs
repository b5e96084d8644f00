//! Unit tests for runtime-arity currying.

#![cfg(feature = "combinator")]

use std::cell::Cell;
use std::rc::Rc;

use fpkit::combinator::{Application, Curried, curry};
use rstest::rstest;

fn subtract(arguments: Vec<i32>) -> i32 {
    arguments[0] - arguments[1]
}

#[rstest]
fn test_curry_two_arguments() {
    let curried = curry(2)(subtract);
    assert_eq!(curried.apply(5).apply(2).complete(), Some(3));
}

#[rstest]
fn test_curry_keeps_application_order() {
    let curried = curry(2)(subtract);
    assert_eq!(curried.apply(2).apply(5).complete(), Some(-3));
}

#[rstest]
fn test_curry_zero_call() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let curried = curry(0)(move |arguments: Vec<u8>| {
        counter.set(counter.get() + 1);
        arguments.len()
    });

    assert_eq!(curried.call(), 0);
    assert_eq!(calls.get(), 1);
}

#[rstest]
fn test_function_is_not_called_before_saturation() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let curried = Curried::new(3, move |arguments: Vec<u8>| {
        counter.set(counter.get() + 1);
        arguments
    });

    let application = curried.apply(1).apply(2);
    assert!(!application.is_complete());
    assert_eq!(calls.get(), 0);

    assert_eq!(application.apply(3).complete(), Some(vec![1, 2, 3]));
    assert_eq!(calls.get(), 1);
}

#[rstest]
#[case(1)]
#[case(3)]
#[case(8)]
fn test_remaining_counts_down(#[case] arity: usize) {
    let mut curried = Curried::new(arity, |arguments: Vec<usize>| arguments.len());

    for collected in 1..arity {
        curried = curried.apply(collected).partial().unwrap();
        assert_eq!(curried.remaining(), arity - collected);
        assert_eq!(curried.collected(), collected);
    }

    assert_eq!(curried.apply(arity).complete(), Some(arity));
}

#[rstest]
fn test_partial_applications_branch_independently() {
    let greet = curry(2)(|words: Vec<String>| words.join(", "));
    let hello = greet.apply("hello".to_string()).partial().unwrap();

    let to_world = hello.apply("world".to_string()).complete();
    let to_rust = hello.apply("rust".to_string()).complete();

    assert_eq!(to_world.as_deref(), Some("hello, world"));
    assert_eq!(to_rust.as_deref(), Some("hello, rust"));
}

#[rstest]
fn test_call_forces_with_missing_arguments() {
    let describe = Curried::new(3, |arguments: Vec<char>| arguments.iter().collect::<String>());
    let partial = describe.apply('a').apply('b').partial().unwrap();
    assert_eq!(partial.call(), "ab");
}

#[rstest]
fn test_application_debug() {
    let pending: Application<i32, i32> = Curried::new(2, subtract).apply(1);
    assert_eq!(
        format!("{pending:?}"),
        "Partial(Curried { remaining: 1, collected: 1, .. })"
    );

    let done: Application<i32, i32> = Curried::new(1, |arguments: Vec<i32>| arguments[0]).apply(7);
    assert_eq!(format!("{done:?}"), "Complete(7)");
}
