//! Shape descriptors and the `has` predicate builder.
//!
//! A [`Shape`] lists keys a candidate must contain and what each value must
//! look like. Keys absent from the shape are not inspected, so a shape is a
//! partial description of the candidate.

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use serde_json::Value;

use super::Segment;

/// What a single field of a candidate must satisfy.
#[derive(Clone)]
pub enum Matcher {
    /// The field equals this value.
    Equals(Value),
    /// The predicate returns `true` for the field.
    Satisfies(Rc<dyn Fn(&Value) -> bool>),
    /// The field matches the nested shape.
    Nested(Shape),
}

impl Matcher {
    fn matches(&self, field: &Value) -> bool {
        match self {
            Self::Equals(expected) => field == expected,
            Self::Satisfies(predicate) => predicate(field),
            Self::Nested(shape) => shape.matches(field),
        }
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Equals(value) => formatter.debug_tuple("Equals").field(value).finish(),
            Self::Satisfies(_) => formatter.write_str("Satisfies(<predicate>)"),
            Self::Nested(shape) => formatter.debug_tuple("Nested").field(shape).finish(),
        }
    }
}

/// A partial description of an object or array.
///
/// Object candidates are matched by key. Array candidates are matched by
/// index, using keys that spell a canonical decimal number (`"2"`, not
/// `"02"`).
///
/// # Examples
///
/// ```
/// use fpkit::select::{Shape, has};
/// use serde_json::json;
///
/// let shape = Shape::new()
///     .equals("kind", "user")
///     .satisfies("age", |age| age.as_u64().is_some_and(|age| age >= 18))
///     .nested("address", Shape::new().equals("country", "NO"));
///
/// let adult = has(shape);
/// assert!(adult(&json!({
///     "kind": "user",
///     "age": 30,
///     "address": { "country": "NO", "city": "Oslo" },
/// })));
/// assert!(!adult(&json!({ "kind": "user", "age": 12 })));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Shape {
    fields: BTreeMap<String, Matcher>,
}

impl Shape {
    /// Creates the empty shape, which matches every candidate.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a shape from a JSON object or array.
    ///
    /// Nested objects and arrays become nested shapes; every other value must
    /// match exactly. Scalars produce the empty shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use fpkit::select::{Shape, has};
    /// use serde_json::json;
    ///
    /// let tagged = has(Shape::from_value(&json!({ "tags": ["urgent"] })));
    ///
    /// assert!(tagged(&json!({ "tags": ["urgent", "billing"] })));
    /// assert!(!tagged(&json!({ "tags": ["billing"] })));
    /// ```
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let entries: Vec<(String, &Value)> = match value {
            Value::Object(fields) => fields
                .iter()
                .map(|(key, field)| (key.clone(), field))
                .collect(),
            Value::Array(elements) => elements
                .iter()
                .enumerate()
                .map(|(index, element)| (index.to_string(), element))
                .collect(),
            _ => Vec::new(),
        };

        entries
            .into_iter()
            .fold(Self::new(), |shape, (key, field)| match field {
                Value::Object(_) | Value::Array(_) => shape.nested(key, Self::from_value(field)),
                _ => shape.equals(key, field.clone()),
            })
    }

    /// Requires `key` to equal `value`.
    #[must_use]
    pub fn equals(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.with(key, Matcher::Equals(value.into()))
    }

    /// Requires `predicate` to hold for the value at `key`.
    #[must_use]
    pub fn satisfies<P>(self, key: impl Into<String>, predicate: P) -> Self
    where
        P: Fn(&Value) -> bool + 'static,
    {
        self.with(key, Matcher::Satisfies(Rc::new(predicate)))
    }

    /// Requires the value at `key` to match `shape`.
    #[must_use]
    pub fn nested(self, key: impl Into<String>, shape: Self) -> Self {
        self.with(key, Matcher::Nested(shape))
    }

    /// Sets the matcher for `key`, replacing any previous one.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, matcher: Matcher) -> Self {
        self.fields.insert(key.into(), matcher);
        self
    }

    /// Returns the number of keys the shape constrains.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the shape constrains nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Tests `candidate` against every entry.
    ///
    /// A key missing from the candidate never matches, whatever its matcher.
    #[must_use]
    pub fn matches(&self, candidate: &Value) -> bool {
        self.fields
            .iter()
            .all(|(key, matcher)| field(candidate, key).is_some_and(|value| matcher.matches(value)))
    }
}

fn field<'a>(candidate: &'a Value, key: &str) -> Option<&'a Value> {
    Segment::Key(key.to_owned()).lookup(candidate)
}

/// Builds a predicate testing whether a candidate matches `shape`.
///
/// # Arguments
///
/// * `shape` - The partial description every accepted candidate must satisfy
///
/// # Returns
///
/// A predicate that is `true` when each key of `shape` is present in the
/// candidate and its matcher holds
pub fn has(shape: Shape) -> impl Fn(&Value) -> bool {
    move |candidate: &Value| shape.matches(candidate)
}
