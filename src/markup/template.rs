//! Placeholder substitution
//!
//! Text nodes and attribute values may carry placeholders that are resolved
//! against a [`Namespace`] at render time:
//!
//! | Syntax    | Meaning                                  |
//! |-----------|------------------------------------------|
//! | `${name}` | value of `name`                          |
//! | `$name`   | value of `name` (name ends at first non-identifier char) |
//! | `$$`      | a literal `$`                            |
//!
//! Identifiers are ASCII: `[_A-Za-z][_A-Za-z0-9]*`. Any other use of `$` is a
//! syntax error reported with its 1-based line and column.

use super::error::TemplateError;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::Deserialize;
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\$(?:(?P<escaped>\$)|(?P<named>[_a-zA-Z][_a-zA-Z0-9]*)|\{(?P<braced>[_a-zA-Z][_a-zA-Z0-9]*)\}|(?P<invalid>))",
    )
    .unwrap()
});

/// Flat mapping of variable names to their rendered values
///
/// Supplied once per render call and threaded unchanged through the whole
/// subtree. Values are stored already stringified.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "HashMap<String, serde_json::Value>")]
pub struct Namespace {
    values: HashMap<String, String>,
}

impl Namespace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a namespace from `(name, value)` pairs
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: fmt::Display,
    {
        pairs.into_iter().collect()
    }

    /// Define `name`, returning the previous value if there was one
    pub fn insert(&mut self, name: impl Into<String>, value: impl fmt::Display) -> Option<String> {
        self.values.insert(name.into(), value.to_string())
    }

    /// Chaining form of [`Namespace::insert`]
    pub fn with(mut self, name: impl Into<String>, value: impl fmt::Display) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Replace every placeholder in `text` with its value
    ///
    /// Text without a `$` is returned borrowed.
    pub fn substitute<'a>(&self, text: &'a str) -> Result<Cow<'a, str>, TemplateError> {
        if !text.contains('$') {
            return Ok(Cow::Borrowed(text));
        }

        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        for caps in PLACEHOLDER.captures_iter(text) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            out.push_str(&text[last..whole.start()]);
            out.push_str(self.resolve(&caps, text, whole.start())?);
            last = whole.end();
        }
        out.push_str(&text[last..]);
        Ok(Cow::Owned(out))
    }

    fn resolve<'s>(
        &'s self,
        caps: &Captures<'_>,
        text: &str,
        offset: usize,
    ) -> Result<&'s str, TemplateError> {
        if caps.name("escaped").is_some() {
            return Ok("$");
        }
        if let Some(name) = caps.name("named").or_else(|| caps.name("braced")) {
            return self
                .get(name.as_str())
                .ok_or_else(|| TemplateError::MissingVariable(name.as_str().to_string()));
        }
        let (line, column) = line_and_column(text, offset);
        Err(TemplateError::InvalidPlaceholder { line, column })
    }
}

impl<K, V> FromIterator<(K, V)> for Namespace
where
    K: Into<String>,
    V: fmt::Display,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut namespace = Namespace::new();
        namespace.extend(iter);
        namespace
    }
}

impl<K, V> Extend<(K, V)> for Namespace
where
    K: Into<String>,
    V: fmt::Display,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}

impl From<HashMap<String, String>> for Namespace {
    fn from(values: HashMap<String, String>) -> Self {
        Self { values }
    }
}

/// Scalars keep their plain text form; `null` becomes empty and
/// compound values fall back to their JSON text.
impl From<HashMap<String, serde_json::Value>> for Namespace {
    fn from(raw: HashMap<String, serde_json::Value>) -> Self {
        let values = raw
            .into_iter()
            .map(|(name, value)| {
                let text = match value {
                    serde_json::Value::String(s) => s,
                    serde_json::Value::Null => String::new(),
                    other => other.to_string(),
                };
                (name, text)
            })
            .collect();
        Self { values }
    }
}

fn line_and_column(text: &str, offset: usize) -> (usize, usize) {
    let before = &text[..offset];
    let line = before.matches('\n').count() + 1;
    let column = before.rsplit('\n').next().unwrap_or("").chars().count() + 1;
    (line, column)
}
