//! The `and!` and `or!` macros for predicates of different types.
//!
//! Both build a closure over a borrowed argument. Like [`and`](super::and)
//! and [`or`](super::or), every predicate runs on every call, left to right.

/// Conjunction of predicates that may have different types.
///
/// - `and!()` - Always `true`
/// - `and!(p)` - `|x| p(x)` coerced to `bool`
/// - `and!(p, q, ...)` - `|x| p(x) && q(x) && ...`, evaluating all of them
///
/// # Examples
///
/// ```
/// use fpkit::and;
///
/// let threshold = 10;
/// let in_range = and!(
///     |value: &i32| *value > 0,
///     move |value: &i32| *value < threshold,
/// );
///
/// assert!(in_range(&5));
/// assert!(!in_range(&10));
/// ```
#[macro_export]
macro_rules! and {
    () => {
        |_: &_| true
    };

    ($predicate:expr $(,)?) => {{
        let predicate = $predicate;
        move |arguments: &_| $crate::combinator::Truthy::is_truthy(&predicate(arguments))
    }};

    ($predicate:expr, $($remaining_predicates:expr),+ $(,)?) => {{
        let predicate = $predicate;
        let remaining = $crate::and!($($remaining_predicates),+);
        move |arguments: &_| {
            let satisfied = $crate::combinator::Truthy::is_truthy(&predicate(arguments));
            let remaining_satisfied = remaining(arguments);
            satisfied && remaining_satisfied
        }
    }};
}

/// Disjunction of predicates that may have different types.
///
/// - `or!()` - Always `false`
/// - `or!(p)` - `|x| p(x)` coerced to `bool`
/// - `or!(p, q, ...)` - `|x| p(x) || q(x) || ...`, evaluating all of them
///
/// # Examples
///
/// ```
/// use fpkit::or;
///
/// let is_keyword = or!(
///     |word: &str| word == "fn",
///     |word: &str| word.starts_with("impl"),
/// );
///
/// assert!(is_keyword("fn"));
/// assert!(is_keyword("impl"));
/// assert!(!is_keyword("struct"));
/// ```
#[macro_export]
macro_rules! or {
    () => {
        |_: &_| false
    };

    ($predicate:expr $(,)?) => {{
        let predicate = $predicate;
        move |arguments: &_| $crate::combinator::Truthy::is_truthy(&predicate(arguments))
    }};

    ($predicate:expr, $($remaining_predicates:expr),+ $(,)?) => {{
        let predicate = $predicate;
        let remaining = $crate::or!($($remaining_predicates),+);
        move |arguments: &_| {
            let satisfied = $crate::combinator::Truthy::is_truthy(&predicate(arguments));
            let remaining_satisfied = remaining(arguments);
            satisfied || remaining_satisfied
        }
    }};
}
