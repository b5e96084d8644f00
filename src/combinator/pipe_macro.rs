//! The `pipe!` macro for left-to-right composition of heterogeneous functions.

/// Composes functions from left to right into a new function.
///
/// `pipe!(f, g, h)(x)` is `h(g(f(x)))`. Unlike [`pipe`](crate::combinator::pipe),
/// each stage may change the type of the value flowing through.
///
/// # Syntax
///
/// - `pipe!()` - The identity function
/// - `pipe!(f)` - `f` unchanged
/// - `pipe!(f, g, ...)` - `|x| ...g(f(x))`
///
/// # Examples
///
/// ```
/// use fpkit::pipe;
///
/// fn to_string(value: i32) -> String { value.to_string() }
/// fn length(text: String) -> usize { text.len() }
///
/// let digits = pipe!(to_string, length);
/// assert_eq!(digits(12345), 5);
/// assert_eq!(digits(-7), 2);
///
/// let unchanged = pipe!();
/// assert_eq!(unchanged("same"), "same");
/// ```
#[macro_export]
macro_rules! pipe {
    () => {
        $crate::combinator::identity
    };

    ($function:expr $(,)?) => {
        $function
    };

    ($function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let first = $function;
        let remaining = $crate::pipe!($($remaining_functions),+);
        move |input| remaining(first(input))
    }};
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    #[rstest]
    fn test_pipe_single() {
        let double = |value: i32| value * 2;
        assert_eq!(pipe!(double)(5), 10);
    }

    #[rstest]
    fn test_pipe_order() {
        let add_one = |value: i32| value + 1;
        let double = |value: i32| value * 2;

        assert_eq!(pipe!(add_one, double)(3), 8);
        assert_eq!(pipe!(double, add_one)(3), 7);
    }

    #[rstest]
    fn test_pipe_with_consuming_stages() {
        let collect_even = |values: Vec<i32>| -> Vec<i32> {
            values.into_iter().filter(|value| value % 2 == 0).collect()
        };
        let total = |values: Vec<i32>| values.iter().sum::<i32>();

        let sum_even = pipe!(collect_even, total);
        assert_eq!(sum_even(vec![1, 2, 3, 4]), 6);
    }
}
