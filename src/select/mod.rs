//! Normalizing selectors into callables.
//!
//! A [`Selector`] names something to extract from, or test against, a JSON
//! candidate. [`into`] turns any selector into one uniform callable, a
//! [`Selection`]:
//!
//! | Selector             | Selection                                 |
//! |----------------------|-------------------------------------------|
//! | `Callable(f)`        | `f` itself                                |
//! | `Shape(shape)`       | [`has`]`(shape)`, as `Value::Bool`        |
//! | `Path(path)`         | [`get`]`(path)`, `Value::Null` if missing |
//!
//! # Classification
//!
//! [`Selector::classify`] picks the variant for a dynamic value: objects and
//! arrays describe a shape, every other value names a path.
//!
//! ```
//! use fpkit::select::into;
//! use serde_json::json;
//!
//! let candidate = json!({ "name": "ada", "role": "admin" });
//!
//! let is_admin = into(json!({ "role": "admin" }));
//! let name = into("name");
//!
//! assert_eq!(is_admin.select(&candidate), json!(true));
//! assert_eq!(name.select(&candidate), json!("ada"));
//! ```

mod path;
mod shape;

use std::fmt;
use std::rc::Rc;

use serde_json::Value;

pub use path::{Path, PathError, Segment, get};
pub use shape::{Matcher, Shape, has};

use crate::combinator::Truthy;

/// A callable from a candidate value to a selected value.
///
/// Clones share the same underlying function.
#[derive(Clone)]
pub struct Selection(Rc<dyn Fn(&Value) -> Value>);

impl Selection {
    /// Wraps a function.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(&Value) -> Value + 'static,
    {
        Self(Rc::new(function))
    }

    /// Applies the selection to `candidate`.
    #[must_use]
    pub fn select(&self, candidate: &Value) -> Value {
        (self.0)(candidate)
    }

    /// Applies the selection and coerces the result to a boolean.
    ///
    /// # Examples
    ///
    /// ```
    /// use fpkit::select::into;
    /// use serde_json::json;
    ///
    /// let has_email = into("contact.email");
    /// assert!(has_email.matches(&json!({ "contact": { "email": "a@b.c" } })));
    /// assert!(!has_email.matches(&json!({ "contact": {} })));
    /// ```
    #[must_use]
    pub fn matches(&self, candidate: &Value) -> bool {
        self.select(candidate).is_truthy()
    }

    /// Returns `true` if both selections share the same function.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Converts the selection into a plain closure, for use with the
    /// combinators in [`crate::combinator`].
    ///
    /// # Examples
    ///
    /// ```
    /// use fpkit::combinator::and;
    /// use fpkit::select::into;
    /// use serde_json::json;
    ///
    /// let active_admin = and([
    ///     into(json!({ "role": "admin" })).into_fn(),
    ///     into("active").into_fn(),
    /// ]);
    ///
    /// assert!(active_admin(&json!({ "role": "admin", "active": true })));
    /// assert!(!active_admin(&json!({ "role": "admin", "active": false })));
    /// ```
    pub fn into_fn(self) -> impl Fn(&Value) -> Value {
        move |candidate: &Value| self.select(candidate)
    }
}

impl fmt::Debug for Selection {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Selection(<function>)")
    }
}

/// Something that can be normalized into a [`Selection`].
#[derive(Clone, Debug)]
pub enum Selector {
    /// An existing callable, used as is.
    Callable(Selection),
    /// A shape the candidate must match.
    Shape(Shape),
    /// A path to read from the candidate.
    Path(Path),
}

impl Selector {
    /// Wraps a closure as a [`Selector::Callable`].
    pub fn callable<F>(function: F) -> Self
    where
        F: Fn(&Value) -> Value + 'static,
    {
        Self::Callable(Selection::new(function))
    }

    /// Chooses the variant for a dynamic value.
    ///
    /// - Objects and arrays become a [`Shape`] (see [`Shape::from_value`]).
    /// - Strings become a dotted [`Path`]. A string that is not a valid
    ///   dotted path is used as a single literal key. Only canonical
    ///   decimal segments become indices, so `"007"` reads the key `"007"`.
    /// - Non-negative integers become a single index.
    /// - Any other scalar becomes a single key spelled as its JSON text, so
    ///   `true` reads the field `"true"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fpkit::select::{Path, Selector};
    /// use serde_json::json;
    ///
    /// assert!(matches!(Selector::classify(&json!({ "a": 1 })), Selector::Shape(_)));
    /// assert!(matches!(Selector::classify(&json!([1, 2])), Selector::Shape(_)));
    ///
    /// let Selector::Path(path) = Selector::classify(&json!("a..b")) else { unreachable!() };
    /// assert_eq!(path, Path::key("a..b"));
    /// ```
    #[must_use]
    pub fn classify(value: &Value) -> Self {
        let selector = match value {
            Value::Object(_) | Value::Array(_) => Self::Shape(Shape::from_value(value)),
            Value::String(text) => Self::Path(dotted_or_literal(text)),
            Value::Number(number) => Self::Path(
                number
                    .as_u64()
                    .and_then(|index| usize::try_from(index).ok())
                    .map_or_else(|| Path::key(number.to_string()), Path::index),
            ),
            Value::Bool(_) | Value::Null => Self::Path(Path::key(value.to_string())),
        };
        tracing::trace!(?selector, "classified selector");
        selector
    }
}

fn dotted_or_literal(text: &str) -> Path {
    text.parse().unwrap_or_else(|error: PathError| {
        tracing::debug!(%error, key = text, "using invalid path as a literal key");
        Path::key(text)
    })
}

impl From<Selection> for Selector {
    fn from(selection: Selection) -> Self {
        Self::Callable(selection)
    }
}

impl From<Shape> for Selector {
    fn from(shape: Shape) -> Self {
        Self::Shape(shape)
    }
}

impl From<Path> for Selector {
    fn from(path: Path) -> Self {
        Self::Path(path)
    }
}

impl From<Value> for Selector {
    fn from(value: Value) -> Self {
        Self::classify(&value)
    }
}

impl From<&Value> for Selector {
    fn from(value: &Value) -> Self {
        Self::classify(value)
    }
}

impl From<&str> for Selector {
    fn from(text: &str) -> Self {
        Self::Path(dotted_or_literal(text))
    }
}

impl From<String> for Selector {
    fn from(text: String) -> Self {
        Self::from(text.as_str())
    }
}

/// Normalizes a selector into a [`Selection`].
///
/// Callables pass through unchanged, shapes become [`has`] predicates and
/// paths become [`get`] accessors. Never fails.
///
/// # Arguments
///
/// * `selector` - A [`Selector`], or a value classified into one: a
///   [`Selection`], [`Shape`], [`Path`], JSON [`Value`] or string
///
/// # Returns
///
/// A [`Selection`] producing `Value::Bool` for shapes, the value at the path
/// (or `Value::Null`) for paths, and whatever the callable returns otherwise
///
/// # Examples
///
/// ```
/// use fpkit::select::{Selection, into};
/// use serde_json::{Value, json};
///
/// let length = Selection::new(|candidate: &Value| {
///     json!(candidate.as_array().map_or(0, Vec::len))
/// });
///
/// let same = into(length.clone());
/// assert!(same.ptr_eq(&length));
/// assert_eq!(same.select(&json!([1, 2, 3])), json!(3));
/// ```
pub fn into(selector: impl Into<Selector>) -> Selection {
    match selector.into() {
        Selector::Callable(selection) => selection,
        Selector::Shape(shape) => {
            let predicate = has(shape);
            Selection::new(move |candidate: &Value| Value::Bool(predicate(candidate)))
        }
        Selector::Path(path) => Selection::new(get(path)),
    }
}

static_assertions::assert_not_impl_any!(Selection: Send, Sync);
static_assertions::assert_not_impl_any!(Selector: Send, Sync);
static_assertions::assert_impl_all!(Path: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!(2), json!(["a", "b", "c"]), json!("c"))]
    #[case(json!(-1), json!({ "-1": "negative" }), json!("negative"))]
    #[case(json!(1.5), json!({ "1.5": "float" }), json!("float"))]
    #[case(json!(true), json!({ "true": "yes" }), json!("yes"))]
    #[case(json!(null), json!({ "null": 0 }), json!(0))]
    #[case(json!("a.b"), json!({ "a": { "b": "nested" } }), json!("nested"))]
    #[case(json!("007"), json!({ "007": "bond", "7": "seven" }), json!("bond"))]
    #[case(json!("+1"), json!({ "+1": "plus" }), json!("plus"))]
    #[case(json!("-0"), json!({ "-0": "negative zero" }), json!("negative zero"))]
    #[case(json!("a.007"), json!({ "a": { "007": 1 } }), json!(1))]
    #[case(json!("\"a.b\""), json!({ "a.b": "dotted key" }), json!("dotted key"))]
    fn test_scalars_select_paths(
        #[case] selector: Value,
        #[case] candidate: Value,
        #[case] expected: Value,
    ) {
        assert_eq!(into(selector).select(&candidate), expected);
    }

    #[rstest]
    fn test_structured_values_select_shapes() {
        let selection = into(json!({ "status": "ok", "meta": { "retries": 0 } }));

        assert_eq!(
            selection.select(&json!({ "status": "ok", "meta": { "retries": 0, "took": 5 } })),
            json!(true)
        );
        assert_eq!(selection.select(&json!({ "status": "ok" })), json!(false));
    }

    #[rstest]
    fn test_callable_passes_through() {
        let constant = Selection::new(|_: &Value| json!("constant"));
        let selection = into(Selector::Callable(constant.clone()));

        assert!(selection.ptr_eq(&constant));
        assert!(!selection.ptr_eq(&Selection::new(|_: &Value| json!("constant"))));
    }

    #[rstest]
    fn test_invalid_path_string_is_literal_key() {
        let selection = into(".hidden");
        assert_eq!(selection.select(&json!({ ".hidden": 1 })), json!(1));
    }

    #[rstest]
    #[case("a..b")]
    #[case("")]
    #[case(".hidden")]
    #[case("\"unterminated")]
    fn test_literal_key_fallback_survives_text_form(#[case] key: &str) {
        let Selector::Path(path) = Selector::from(key) else {
            unreachable!("strings classify as paths")
        };
        assert_eq!(path, Path::key(key));
        assert_eq!(path.to_string().parse::<Path>(), Ok(path));
    }

    #[rstest]
    fn test_selector_callable_constructor() {
        let doubled = into(Selector::callable(|candidate: &Value| {
            json!(candidate.as_i64().unwrap_or_default() * 2)
        }));
        assert_eq!(doubled.select(&json!(21)), json!(42));
    }
}
