//! Predicate combinators: [`not`], [`and`] and [`or`].
//!
//! Predicates borrow their argument and may return any [`Truthy`] value.
//! Several arguments are passed as a tuple or a slice.
//!
//! [`and`] and [`or`] evaluate every predicate, in order, even after the
//! result is already decided. Side effects in predicates always run. Use the
//! [`and!`](crate::and) and [`or!`](crate::or) macros when the predicates
//! have different types.

use super::Truthy;

/// Negates a predicate.
///
/// `not(f)(x) == !f(x)`.
///
/// # Examples
///
/// ```
/// use fpkit::combinator::not;
///
/// let is_odd = not(|value: &i32| value % 2 == 0);
/// assert!(is_odd(&3));
/// assert!(!is_odd(&4));
///
/// // Any truthy result can be negated
/// let is_blank = not(|text: &str| text.trim().to_string());
/// assert!(is_blank("   "));
/// ```
pub fn not<A, R, F>(predicate: F) -> impl Fn(&A) -> bool
where
    A: ?Sized,
    F: Fn(&A) -> R,
    R: Truthy,
{
    move |arguments: &A| !predicate(arguments).is_truthy()
}

/// Conjunction of predicates.
///
/// Folds from `true`, so `and([])` accepts everything.
///
/// # Examples
///
/// ```
/// use fpkit::combinator::and;
///
/// fn is_positive(value: &i32) -> bool { *value > 0 }
/// fn is_small(value: &i32) -> bool { *value < 10 }
///
/// let checks: [fn(&i32) -> bool; 2] = [is_positive, is_small];
/// let in_range = and(checks);
/// assert!(in_range(&5));
/// assert!(!in_range(&50));
///
/// let anything = and(Vec::<fn(&i32) -> bool>::new());
/// assert!(anything(&-1));
/// ```
pub fn and<A, R, F, I>(predicates: I) -> impl Fn(&A) -> bool
where
    A: ?Sized,
    I: IntoIterator<Item = F>,
    F: Fn(&A) -> R,
    R: Truthy,
{
    let predicates: Vec<F> = predicates.into_iter().collect();
    move |arguments: &A| {
        predicates.iter().fold(true, |accumulated, predicate| {
            let satisfied = predicate(arguments).is_truthy();
            accumulated && satisfied
        })
    }
}

/// Disjunction of predicates.
///
/// Folds from `false`, so `or([])` rejects everything.
///
/// # Examples
///
/// ```
/// use fpkit::combinator::or;
///
/// let is_edge: Vec<Box<dyn Fn(&i32) -> bool>> = vec![
///     Box::new(|value: &i32| *value == 0),
///     Box::new(|value: &i32| *value == 100),
/// ];
/// let on_edge = or(is_edge);
/// assert!(on_edge(&100));
/// assert!(!on_edge(&50));
/// ```
pub fn or<A, R, F, I>(predicates: I) -> impl Fn(&A) -> bool
where
    A: ?Sized,
    I: IntoIterator<Item = F>,
    F: Fn(&A) -> R,
    R: Truthy,
{
    let predicates: Vec<F> = predicates.into_iter().collect();
    move |arguments: &A| {
        predicates.iter().fold(false, |accumulated, predicate| {
            let satisfied = predicate(arguments).is_truthy();
            accumulated || satisfied
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    #[case(5, true)]
    #[case(0, false)]
    #[case(10, false)]
    fn test_and_range(#[case] input: i32, #[case] expected: bool) {
        let checks: [fn(&i32) -> bool; 2] = [|value| *value > 0, |value| *value < 10];
        assert_eq!(and(checks)(&input), expected);
    }

    #[rstest]
    fn test_and_evaluates_every_predicate() {
        let calls = Cell::new(0);
        let counted = |result: bool| {
            let calls = &calls;
            move |_: &i32| {
                calls.set(calls.get() + 1);
                result
            }
        };

        let conjunction = and([counted(false), counted(true), counted(false)]);
        assert!(!conjunction(&1));
        assert_eq!(calls.get(), 3);
    }

    #[rstest]
    fn test_or_evaluates_every_predicate() {
        let calls = Cell::new(0);
        let counted = |result: bool| {
            let calls = &calls;
            move |_: &i32| {
                calls.set(calls.get() + 1);
                result
            }
        };

        let disjunction = or([counted(true), counted(false)]);
        assert!(disjunction(&1));
        assert_eq!(calls.get(), 2);
    }

    #[rstest]
    fn test_empty_folds() {
        assert!(and(Vec::<fn(&i32) -> bool>::new())(&0));
        assert!(!or(Vec::<fn(&i32) -> bool>::new())(&0));
    }

    #[rstest]
    fn test_predicates_over_tuples() {
        let ordered = and([|(low, high): &(i32, i32)| low <= high]);
        assert!(ordered(&(1, 2)));
        assert!(!ordered(&(3, 2)));
    }

    #[rstest]
    fn test_not_with_option_result() {
        let missing = not(|key: &str| key.find('='));
        assert!(missing("flag"));
        assert!(!missing("key=value"));
    }
}
