//! Left-to-right composition of a sequence of functions.

/// Composes functions left to right.
///
/// `pipe([f, g, h])(x) == h(g(f(x)))`. Each result is the sole input of the
/// next function. An empty sequence gives the identity function.
///
/// All functions share one type `T -> T`; use the [`pipe!`](crate::pipe)
/// macro to chain functions that change the type.
///
/// # Examples
///
/// ```
/// use fpkit::combinator::pipe;
///
/// let stages: [fn(i32) -> i32; 2] = [|value| value + 1, |value| value * 2];
/// let pipeline = pipe(stages);
/// assert_eq!(pipeline(3), 8);
///
/// let unchanged = pipe(Vec::<fn(i32) -> i32>::new());
/// assert_eq!(unchanged(3), 3);
/// ```
pub fn pipe<T, F, I>(functions: I) -> impl Fn(T) -> T
where
    I: IntoIterator<Item = F>,
    F: Fn(T) -> T,
{
    let functions: Vec<F> = functions.into_iter().collect();
    move |input: T| {
        functions
            .iter()
            .fold(input, |accumulated, function| function(accumulated))
    }
}
