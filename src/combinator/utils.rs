//! Basic combinators.
//!
//! - [`identity`]: the I combinator
//! - [`always`]: the K combinator
//! - [`flip`]: the C combinator over curried functions
//! - [`flip2`]: the C combinator over binary functions

use std::rc::Rc;

/// Returns the value unchanged.
///
/// The identity function is the unit of [`pipe`](super::pipe):
/// `pipe([identity, f])` behaves like `f`.
///
/// # Examples
///
/// ```
/// use fpkit::combinator::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// assert_eq!(identity(vec![1, 2, 3]), vec![1, 2, 3]);
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns `value`, ignoring its input.
///
/// The returned function clones `value` on every call, so it can be called
/// any number of times.
///
/// # Examples
///
/// ```
/// use fpkit::combinator::always;
///
/// let always_five = always(5);
/// assert_eq!(always_five("ignored"), 5);
///
/// let zeros: Vec<i32> = vec![1, 2, 3].into_iter().map(always(0)).collect();
/// assert_eq!(zeros, vec![0, 0, 0]);
/// ```
#[inline]
pub fn always<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the two arguments of a curried function.
///
/// `flip(f)(a)(b) == f(b)(a)`.
///
/// # Examples
///
/// ```
/// use fpkit::combinator::flip;
///
/// let subtract = |minuend: i32| move |subtrahend: i32| minuend - subtrahend;
/// let subtract_from = flip(subtract);
///
/// // subtract(10)(3) = 7, flipped: subtract_from(3)(10) = 7
/// assert_eq!(subtract(10)(3), 7);
/// assert_eq!(subtract_from(3)(10), 7);
/// ```
pub fn flip<A, B, C, F, G>(function: F) -> impl Fn(B) -> Box<dyn Fn(A) -> C>
where
    F: Fn(A) -> G + 'static,
    G: Fn(B) -> C + 'static,
    A: 'static,
    B: Clone + 'static,
    C: 'static,
{
    let function = Rc::new(function);
    move |second_argument: B| {
        let function = Rc::clone(&function);
        let applied: Box<dyn Fn(A) -> C> =
            Box::new(move |first_argument: A| function(first_argument)(second_argument.clone()));
        applied
    }
}

/// Swaps the arguments of a binary function.
///
/// `flip2(f)(a, b) == f(b, a)`, and `flip2(flip2(f))` behaves like `f`.
///
/// # Examples
///
/// ```
/// use fpkit::combinator::flip2;
///
/// fn divide(numerator: f64, denominator: f64) -> f64 {
///     numerator / denominator
/// }
///
/// let flipped = flip2(divide);
/// assert!((flipped(10.0, 2.0) - 0.2).abs() < f64::EPSILON);
/// ```
#[inline]
pub fn flip2<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second_argument, first_argument| function(first_argument, second_argument)
}
