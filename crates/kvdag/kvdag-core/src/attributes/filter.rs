//! Declarative match predicates evaluated against an attribute proxy.

use regex::Regex;
use serde_json::Value;

use super::AttributeMap;
use crate::constants::DEFAULT_KEY_PATH_SEPARATOR;
use crate::errors::FilterError;

/// A test applied to the value found at one key path.
#[derive(Debug, Clone)]
pub enum Matcher {
    /// Value equals the expected value.
    Eq(Value),
    /// Value equals one of the listed values.
    OneOf(Vec<Value>),
    /// Key is present, whatever its value.
    Present,
    /// Value is a string matching the regex.
    Pattern(Regex),
}

impl Matcher {
    pub fn eq(value: impl Into<Value>) -> Self {
        Self::Eq(value.into())
    }

    /// Compile `pattern` into a [`Matcher::Pattern`].
    pub fn pattern(pattern: &str) -> Result<Self, FilterError> {
        Regex::new(pattern)
            .map(Self::Pattern)
            .map_err(|e| FilterError::InvalidPattern {
                pattern: pattern.to_string(),
                message: e.to_string(),
            })
    }

    /// Test the value found at a key path, `None` meaning the key is absent.
    pub fn test(&self, found: Option<&Value>) -> bool {
        let Some(found) = found else {
            return false;
        };
        match self {
            Self::Eq(expected) => found == expected,
            Self::OneOf(candidates) => candidates.iter().any(|c| c == found),
            Self::Present => true,
            Self::Pattern(re) => found.as_str().is_some_and(|s| re.is_match(s)),
        }
    }
}

/// One `key path → matcher` condition.
#[derive(Debug, Clone)]
pub struct Condition {
    pub key: String,
    pub matcher: Matcher,
}

impl Condition {
    pub fn new(key: impl Into<String>, matcher: Matcher) -> Self {
        Self {
            key: key.into(),
            matcher,
        }
    }

    fn holds(&self, attrs: &AttributeMap, separator: &str) -> bool {
        self.matcher.test(attrs.get_path_with(&self.key, separator))
    }
}

/// A vertex filter.
///
/// The plain form is a mapping of key to expected value: it matches when
/// every key is present with an equal value, and the empty filter matches
/// everything. Conditions can also be grouped under `any` (at least one
/// must hold when the group is non-empty) and `none` (none may hold).
#[derive(Debug, Clone, Default)]
pub struct Filter {
    all: Vec<Condition>,
    any: Vec<Condition>,
    none: Vec<Condition>,
}

impl Filter {
    /// The empty filter, which matches every vertex.
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `key` to equal `value`.
    pub fn eq(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.all(key, Matcher::eq(value))
    }

    /// Require `key` to hold for `matcher`.
    pub fn all(mut self, key: impl Into<String>, matcher: Matcher) -> Self {
        self.all.push(Condition::new(key, matcher));
        self
    }

    /// Add an alternative: at least one `any` condition must hold.
    pub fn any(mut self, key: impl Into<String>, matcher: Matcher) -> Self {
        self.any.push(Condition::new(key, matcher));
        self
    }

    /// Exclude vertices for which this condition holds.
    pub fn none(mut self, key: impl Into<String>, matcher: Matcher) -> Self {
        self.none.push(Condition::new(key, matcher));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty() && self.any.is_empty() && self.none.is_empty()
    }

    /// Evaluate against `attrs` using the default `"."` key path separator.
    pub fn matches(&self, attrs: &AttributeMap) -> bool {
        self.matches_with(attrs, DEFAULT_KEY_PATH_SEPARATOR)
    }

    pub fn matches_with(&self, attrs: &AttributeMap, separator: &str) -> bool {
        self.all.iter().all(|c| c.holds(attrs, separator))
            && (self.any.is_empty() || self.any.iter().any(|c| c.holds(attrs, separator)))
            && !self.none.iter().any(|c| c.holds(attrs, separator))
    }
}

impl From<AttributeMap> for Filter {
    /// Every entry becomes an equality condition.
    fn from(expected: AttributeMap) -> Self {
        expected
            .into_iter()
            .fold(Filter::new(), |filter, (key, value)| filter.eq(key, value))
    }
}

impl<K, V> FromIterator<(K, V)> for Filter
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Filter::new(), |filter, (key, value)| filter.eq(key, value))
    }
}
