//! Runtime-arity currying.
//!
//! [`curry`] turns a function over a sequence of arguments into a value that
//! collects those arguments one application at a time. Every application
//! returns a new [`Curried`]: the collected arguments live in a
//! [`PersistentList`] built with `cons`, so partial applications share
//! structure and stay reusable.
//!
//! # Argument Order
//!
//! `cons` prepends, so the list holds the newest argument first. It is
//! reversed before the call, and the function always receives its arguments
//! in the order they were applied.

use std::fmt;
use std::rc::Rc;

use crate::persistent::PersistentList;

/// Curries a function of `arity` arguments.
///
/// `curry(n)(f)` collects `n` arguments, then calls `f` with all of them,
/// earliest first.
///
/// # Arguments
///
/// * `arity` - The number of applications before the function runs
///
/// # Returns
///
/// A function taking `f` and returning a [`Curried`] with no arguments
/// collected yet
///
/// # Examples
///
/// ```
/// use fpkit::combinator::curry;
///
/// let subtract = curry(2)(|arguments: Vec<i32>| arguments[0] - arguments[1]);
/// let result = subtract.apply(5).apply(2).complete();
/// assert_eq!(result, Some(3));
/// ```
pub fn curry<A, R, F>(arity: usize) -> impl Fn(F) -> Curried<A, R>
where
    A: Clone,
    F: Fn(Vec<A>) -> R + 'static,
{
    move |function: F| Curried::new(arity, function)
}

/// A function waiting for more arguments.
///
/// Cloning is cheap: the function and the collected arguments are shared.
pub struct Curried<A, R> {
    remaining: usize,
    arguments: PersistentList<A>,
    function: Rc<dyn Fn(Vec<A>) -> R>,
}

/// The outcome of applying a [`Curried`] to one more argument.
pub enum Application<A, R> {
    /// More arguments are needed.
    Partial(Curried<A, R>),
    /// The function has been called with every argument.
    Complete(R),
}

impl<A: Clone, R> Curried<A, R> {
    /// Creates a curried function expecting `arity` arguments.
    pub fn new<F>(arity: usize, function: F) -> Self
    where
        F: Fn(Vec<A>) -> R + 'static,
    {
        Self {
            remaining: arity,
            arguments: PersistentList::new(),
            function: Rc::new(function),
        }
    }

    /// Supplies the next argument.
    ///
    /// Returns [`Application::Complete`] once the last expected argument
    /// arrives. A curry of arity zero completes on its first application and
    /// ignores the argument.
    ///
    /// # Examples
    ///
    /// ```
    /// use fpkit::combinator::{Application, curry};
    ///
    /// let join = curry(3)(|words: Vec<&str>| words.join(" "));
    /// let greeting = match join.apply("hello") {
    ///     Application::Partial(rest) => rest,
    ///     Application::Complete(_) => unreachable!(),
    /// };
    ///
    /// assert_eq!(greeting.apply("big").apply("world").complete().as_deref(), Some("hello big world"));
    /// assert_eq!(greeting.apply("small").apply("world").complete().as_deref(), Some("hello small world"));
    /// ```
    #[must_use]
    pub fn apply(&self, argument: A) -> Application<A, R> {
        if self.remaining == 0 {
            return Application::Complete(self.call());
        }

        let next = Self {
            remaining: self.remaining - 1,
            arguments: self.arguments.cons(argument),
            function: Rc::clone(&self.function),
        };

        if next.remaining == 0 {
            tracing::trace!(arity = next.arguments.len(), "curried function saturated");
            Application::Complete(next.call())
        } else {
            Application::Partial(next)
        }
    }

    /// Calls the function with the arguments collected so far.
    ///
    /// No arity check is made: missing arguments are simply absent from the
    /// sequence the function receives.
    ///
    /// # Examples
    ///
    /// ```
    /// use fpkit::combinator::curry;
    ///
    /// let count = curry(0)(|arguments: Vec<()>| arguments.len());
    /// assert_eq!(count.call(), 0);
    /// ```
    pub fn call(&self) -> R {
        let arguments: Vec<A> = self.arguments.reverse().into_iter().collect();
        (self.function)(arguments)
    }

    /// Returns how many arguments are still expected.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.remaining
    }

    /// Returns how many arguments have been collected.
    #[must_use]
    pub const fn collected(&self) -> usize {
        self.arguments.len()
    }
}

impl<A: Clone, R> Application<A, R> {
    /// Supplies one more argument.
    ///
    /// A complete application stays complete and the argument is ignored.
    #[must_use]
    pub fn apply(self, argument: A) -> Self {
        match self {
            Self::Partial(curried) => curried.apply(argument),
            complete @ Self::Complete(_) => complete,
        }
    }

    /// Returns the result if the function has been called.
    pub fn complete(self) -> Option<R> {
        match self {
            Self::Complete(result) => Some(result),
            Self::Partial(_) => None,
        }
    }

    /// Returns the pending function if more arguments are needed.
    pub fn partial(self) -> Option<Curried<A, R>> {
        match self {
            Self::Partial(curried) => Some(curried),
            Self::Complete(_) => None,
        }
    }

    /// Returns `true` if the function has been called.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }
}

impl<A, R> Clone for Curried<A, R> {
    fn clone(&self) -> Self {
        Self {
            remaining: self.remaining,
            arguments: self.arguments.clone(),
            function: Rc::clone(&self.function),
        }
    }
}

impl<A, R> fmt::Debug for Curried<A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Curried")
            .field("remaining", &self.remaining)
            .field("collected", &self.arguments.len())
            .finish_non_exhaustive()
    }
}

impl<A, R: fmt::Debug> fmt::Debug for Application<A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Partial(curried) => formatter.debug_tuple("Partial").field(curried).finish(),
            Self::Complete(result) => formatter.debug_tuple("Complete").field(result).finish(),
        }
    }
}
