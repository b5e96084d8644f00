//! Function combinators.
//!
//! Small higher-order functions that build new functions out of existing ones
//! without any state of their own.
//!
//! # Overview
//!
//! - [`identity`]: returns its argument unchanged
//! - [`always`]: ignores its argument and returns a fixed value
//! - [`flip`] / [`flip2`]: swap the arguments of a curried / binary function
//! - [`not`], [`and`], [`or`]: combine predicates returning any [`Truthy`] value
//! - [`pipe`]: left-to-right composition of a sequence of functions
//! - [`curry`]: collect a fixed number of arguments one at a time
//! - [`pipe!`], [`and!`], [`or!`]: macro forms for functions of different types
//!
//! # Examples
//!
//! ## Pipeline
//!
//! ```
//! use fpkit::pipe;
//!
//! let add_one = |value: i32| value + 1;
//! let double = |value: i32| value * 2;
//!
//! // pipe!(f, g)(x) = g(f(x))
//! assert_eq!(pipe!(add_one, double)(3), 8);
//! ```
//!
//! ## Currying
//!
//! ```
//! use fpkit::combinator::curry;
//!
//! let add = curry(2)(|arguments: Vec<i32>| arguments.iter().sum::<i32>());
//! let add_five = add.apply(5).partial().unwrap();
//!
//! assert_eq!(add_five.apply(3).complete(), Some(8));
//! assert_eq!(add_five.apply(10).complete(), Some(15));
//! ```
//!
//! ## Predicates
//!
//! ```
//! use fpkit::combinator::not;
//! use fpkit::and;
//!
//! let is_digit = |character: &char| character.is_ascii_digit();
//! let is_letter = not(is_digit);
//! let is_hex_letter = and!(is_letter, |character: &char| character.is_ascii_hexdigit());
//!
//! assert!(is_hex_letter(&'b'));
//! assert!(!is_hex_letter(&'7'));
//! assert!(!is_hex_letter(&'z'));
//! ```
//!
//! # Laws
//!
//! - **Pipe identity**: `pipe!(identity, f)(x) == f(x) == pipe!(f, identity)(x)`
//! - **Double flip**: `flip2(flip2(f))(a, b) == f(a, b)`
//! - **Flip definition**: `flip(f)(a)(b) == f(b)(a)`
//! - **Curry equivalence**: `curry(2)(f).apply(a).apply(b) == f(vec![a, b])`

mod curry;
mod logic;
mod logic_macro;
mod pipe;
mod pipe_macro;
mod truthy;
mod utils;

pub use curry::{Application, Curried, curry};
pub use logic::{and, not, or};
pub use pipe::pipe;
pub use truthy::Truthy;
pub use utils::{always, flip, flip2, identity};

// Macros are exported at the crate root by #[macro_export]
pub use crate::and;
pub use crate::or;
pub use crate::pipe;
