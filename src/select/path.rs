//! Paths into JSON values and the `get` accessor builder.

use std::fmt::{self, Write as _};
use std::iter::Peekable;
use std::str::{Chars, FromStr};

use serde_json::Value;
use smallvec::SmallVec;

/// One step of a [`Path`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// An object field, or an array element when the key is a canonical
    /// decimal index.
    Key(String),
    /// An array element, or an object field named by the decimal index.
    Index(usize),
}

/// Reads `text` as an index only when it is the canonical spelling of one,
/// so `"007"`, `"+1"` and `"-0"` stay keys.
fn canonical_index(text: &str) -> Option<usize> {
    text.parse::<usize>()
        .ok()
        .filter(|index| index.to_string() == text)
}

impl Segment {
    fn parse(text: &str) -> Self {
        canonical_index(text).map_or_else(|| Self::Key(text.to_owned()), Self::Index)
    }

    pub(super) fn lookup<'a>(&self, value: &'a Value) -> Option<&'a Value> {
        match (self, value) {
            (Self::Key(key), Value::Object(fields)) => fields.get(key),
            (Self::Key(key), Value::Array(elements)) => {
                canonical_index(key).and_then(|index| elements.get(index))
            }
            (Self::Index(index), Value::Array(elements)) => elements.get(*index),
            (Self::Index(index), Value::Object(fields)) => fields.get(&index.to_string()),
            _ => None,
        }
    }

    fn needs_quotes(key: &str) -> bool {
        key.is_empty()
            || key.contains('.')
            || key.starts_with('"')
            || canonical_index(key).is_some()
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(formatter, "{index}"),
            Self::Key(key) if Self::needs_quotes(key) => {
                formatter.write_char('"')?;
                for character in key.chars() {
                    if matches!(character, '"' | '\\') {
                        formatter.write_char('\\')?;
                    }
                    formatter.write_char(character)?;
                }
                formatter.write_char('"')
            }
            Self::Key(key) => formatter.write_str(key),
        }
    }
}

/// A non-empty sequence of segments, written `a.b.0.c`.
///
/// A segment wrapped in double quotes is always a literal key. Inside the
/// quotes `\"` and `\\` stand for a quote and a backslash. Quoting lets a
/// key hold dots, be empty, or look like an index: `a."b.c"."0"`.
/// [`Display`](fmt::Display) quotes exactly the keys that need it, so every
/// path parses back from its own text.
///
/// # Examples
///
/// ```
/// use fpkit::select::Path;
/// use serde_json::json;
///
/// let path: Path = "user.emails.0".parse().unwrap();
/// let document = json!({ "user": { "emails": ["a@example.com"] } });
///
/// assert_eq!(path.resolve(&document), Some(&json!("a@example.com")));
/// assert_eq!(path.to_string(), "user.emails.0");
///
/// let dotted = Path::key("version.major");
/// assert_eq!(dotted.to_string(), "\"version.major\"");
/// assert_eq!(dotted.to_string().parse::<Path>(), Ok(dotted));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    segments: SmallVec<[Segment; 4]>,
}

/// Errors from parsing a dotted [`Path`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The input was the empty string.
    Empty,
    /// The segment at `position` (zero-based) was empty, as in `a..b`.
    EmptySegment {
        /// Index of the empty segment.
        position: usize,
    },
    /// The quoted segment at `position` has no closing quote.
    UnterminatedQuote {
        /// Index of the quoted segment.
        position: usize,
    },
    /// Text follows the closing quote of the segment at `position`.
    TrailingCharacters {
        /// Index of the quoted segment.
        position: usize,
    },
}

impl fmt::Display for PathError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(formatter, "path is empty"),
            Self::EmptySegment { position } => {
                write!(formatter, "path segment {position} is empty")
            }
            Self::UnterminatedQuote { position } => {
                write!(formatter, "path segment {position} has an unterminated quote")
            }
            Self::TrailingCharacters { position } => {
                write!(formatter, "path segment {position} continues after its closing quote")
            }
        }
    }
}

impl std::error::Error for PathError {}

impl Path {
    /// Creates a path of a single literal key.
    ///
    /// Dots in `key` are kept as part of the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use fpkit::select::Path;
    /// use serde_json::json;
    ///
    /// let path = Path::key("version.major");
    /// assert_eq!(path.resolve(&json!({ "version.major": 2 })), Some(&json!(2)));
    /// ```
    #[must_use]
    pub fn key(key: impl Into<String>) -> Self {
        Self {
            segments: SmallVec::from_elem(Segment::Key(key.into()), 1),
        }
    }

    /// Creates a path of a single array index.
    #[must_use]
    pub fn index(index: usize) -> Self {
        Self {
            segments: SmallVec::from_elem(Segment::Index(index), 1),
        }
    }

    /// Returns a new path with `segment` appended.
    #[must_use]
    pub fn then(&self, segment: Segment) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment);
        Self { segments }
    }

    /// Returns the segments in order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Follows the path through `value` without cloning.
    ///
    /// Returns `None` as soon as a segment is missing.
    #[must_use]
    pub fn resolve<'a>(&self, value: &'a Value) -> Option<&'a Value> {
        self.segments
            .iter()
            .try_fold(value, |current, segment| segment.lookup(current))
    }
}

impl FromStr for Path {
    type Err = PathError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        if text.is_empty() {
            return Err(PathError::Empty);
        }

        let mut characters = text.chars().peekable();
        let mut segments = SmallVec::new();

        for position in 0.. {
            let segment = if characters.next_if_eq(&'"').is_some() {
                Segment::Key(read_quoted(&mut characters, position)?)
            } else {
                let mut bare = String::new();
                while let Some(character) = characters.next_if(|character| *character != '.') {
                    bare.push(character);
                }
                if bare.is_empty() {
                    return Err(PathError::EmptySegment { position });
                }
                Segment::parse(&bare)
            };
            segments.push(segment);

            match characters.next() {
                None => break,
                Some('.') => {}
                Some(_) => return Err(PathError::TrailingCharacters { position }),
            }
        }

        Ok(Self { segments })
    }
}

/// Reads the body of a quoted segment, after its opening quote.
fn read_quoted(characters: &mut Peekable<Chars<'_>>, position: usize) -> Result<String, PathError> {
    let mut key = String::new();
    loop {
        match characters.next() {
            Some('"') => return Ok(key),
            Some('\\') => match characters.next() {
                Some(escaped) => key.push(escaped),
                None => return Err(PathError::UnterminatedQuote { position }),
            },
            Some(character) => key.push(character),
            None => return Err(PathError::UnterminatedQuote { position }),
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, segment) in self.segments.iter().enumerate() {
            if position > 0 {
                formatter.write_str(".")?;
            }
            write!(formatter, "{segment}")?;
        }
        Ok(())
    }
}

impl From<Segment> for Path {
    fn from(segment: Segment) -> Self {
        Self {
            segments: SmallVec::from_elem(segment, 1),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Path {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Path {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// Builds an accessor that reads `path` out of a candidate value.
///
/// # Arguments
///
/// * `path` - The path to follow, or anything convertible into one such as a
///   single [`Segment`]
///
/// # Returns
///
/// A function returning a clone of the value at `path`, or [`Value::Null`]
/// when any segment is missing
///
/// # Examples
///
/// ```
/// use fpkit::select::{Path, get};
/// use serde_json::json;
///
/// let city = get("address.city".parse::<Path>().unwrap());
///
/// assert_eq!(city(&json!({ "address": { "city": "Oslo" } })), json!("Oslo"));
/// assert_eq!(city(&json!({ "address": null })), json!(null));
/// ```
pub fn get(path: impl Into<Path>) -> impl Fn(&Value) -> Value {
    let path = path.into();
    move |candidate: &Value| path.resolve(candidate).cloned().unwrap_or(Value::Null)
}
