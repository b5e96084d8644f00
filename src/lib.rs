//! # fpkit
//!
//! Functional-programming helpers for Rust: small combinators, runtime-arity
//! currying, and a dispatcher that turns selectors into callables over JSON
//! values.
//!
//! ## Overview
//!
//! - **Combinators**: `identity`, `always`, `flip`, `not`, `and`, `or`, `pipe`
//! - **Currying**: `curry(n)(f)` collects `n` arguments one at a time
//! - **Selectors**: `into` normalizes a callable, a shape or a path into a
//!   single callable form
//! - **Persistent list**: the immutable cons list the curry accumulator is
//!   built on
//!
//! ## Feature Flags
//!
//! - `persistent`: Persistent list and the `cons` primitive
//! - `combinator`: Function combinators and currying
//! - `select`: Selectors, shapes and paths over `serde_json::Value`
//! - `serde`: Serialization for `PersistentList` and `Path`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fpkit::prelude::*;
//! use serde_json::json;
//!
//! let ready = and([
//!     into(json!({ "state": "ready" })).into_fn(),
//!     into("replicas").into_fn(),
//! ]);
//!
//! assert!(ready(&json!({ "state": "ready", "replicas": 3 })));
//! assert!(!ready(&json!({ "state": "ready", "replicas": 0 })));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use fpkit::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "persistent")]
    pub use crate::persistent::*;

    #[cfg(feature = "combinator")]
    pub use crate::combinator::*;

    #[cfg(feature = "select")]
    pub use crate::select::*;
}

#[cfg(feature = "persistent")]
pub mod persistent;

#[cfg(feature = "combinator")]
pub mod combinator;

#[cfg(feature = "select")]
pub mod select;
