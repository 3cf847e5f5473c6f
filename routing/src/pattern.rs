//! Path template compilation.
//!
//! DESIGN
//! ======
//! A template is tokenized on `/:name` boundaries: literal runs are
//! regex-escaped, each named parameter becomes a capturing group, and an
//! optional parameter (`:name?`) wraps its capture and the leading slash in
//! one outer optional group so `/commits/:sha?` matches both `/commits` and
//! `/commits/abc123`. The final pattern is anchored `^...$`, tolerates one
//! trailing slash, and matches case-insensitively unless told otherwise.

#[cfg(test)]
#[path = "pattern_test.rs"]
mod pattern_test;

use std::sync::Arc;

use regex::{Regex, RegexBuilder};

/// Key used for the capture of a trailing `*` segment.
pub const SPLAT_KEY: &str = "splat";

/// Error returned by [`Pattern::compile`].
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    /// A `/:` introducer with no identifier after it.
    #[error("template {0:?} has a parameter with an empty name")]
    EmptyParamName(String),
    /// The same parameter name appears twice in one template.
    #[error("template {0:?} repeats the parameter {1:?}")]
    DuplicateParam(String, String),
    /// The generated expression was rejected by the regex engine.
    #[error("template produced an invalid expression: {0}")]
    Regex(#[from] regex::Error),
}

/// Parameters captured from a matched path, in template order.
///
/// Values are percent-decoded; a capture that is not valid UTF-8 after
/// decoding is kept in its raw form instead of being dropped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    /// Look up a parameter by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(name, value)` pairs in template order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn push(&mut self, name: &str, value: String) {
        self.0.push((name.to_owned(), value));
    }
}

/// A compiled path template.
#[derive(Clone, Debug)]
pub struct Pattern {
    template: String,
    regex: Arc<Regex>,
    keys: Vec<String>,
}

impl Pattern {
    /// Compile `template` with the default case-insensitive matching.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] for empty or duplicate parameter names, or if
    /// the generated expression fails to compile.
    pub fn compile(template: &str) -> Result<Self, PatternError> {
        Self::compile_with_case(template, false)
    }

    /// Compile `template`, optionally matching case-sensitively.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Pattern::compile`].
    pub fn compile_with_case(template: &str, case_sensitive: bool) -> Result<Self, PatternError> {
        let (expression, keys) = build_expression(template)?;
        let regex = RegexBuilder::new(&expression)
            .case_insensitive(!case_sensitive)
            .build()?;

        Ok(Self {
            template: template.to_owned(),
            regex: Arc::new(regex),
            keys,
        })
    }

    /// The template this pattern was compiled from.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Match `path` and extract decoded parameters.
    ///
    /// Returns `None` when the path does not match the full template.
    #[must_use]
    pub fn match_path(&self, path: &str) -> Option<Params> {
        let captures = self.regex.captures(path)?;

        let mut params = Params::default();
        for (index, key) in self.keys.iter().enumerate() {
            // Optional params leave their group unparticipating on a miss.
            if let Some(capture) = captures.get(index + 1) {
                params.push(key, decode_component(capture.as_str()));
            }
        }
        Some(params)
    }
}

/// Percent-decode one path component, falling back to the raw text when the
/// decoded bytes are not UTF-8.
fn decode_component(raw: &str) -> String {
    urlencoding::decode(raw).map_or_else(|_| raw.to_owned(), |decoded| decoded.into_owned())
}

fn build_expression(template: &str) -> Result<(String, Vec<String>), PatternError> {
    let mut expression = String::with_capacity(template.len() * 2 + 4);
    expression.push('^');

    let mut keys: Vec<String> = Vec::new();
    let mut literal = String::new();
    let mut chars = template.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '/' && chars.peek() == Some(&':') {
            chars.next();

            let mut name = String::new();
            while let Some(&next) = chars.peek() {
                if next.is_ascii_alphanumeric() || next == '_' {
                    name.push(next);
                    chars.next();
                } else {
                    break;
                }
            }
            if name.is_empty() {
                return Err(PatternError::EmptyParamName(template.to_owned()));
            }
            if keys.iter().any(|key| *key == name) {
                return Err(PatternError::DuplicateParam(template.to_owned(), name));
            }

            let optional = chars.peek() == Some(&'?');
            if optional {
                chars.next();
            }

            expression.push_str(&regex::escape(&literal));
            literal.clear();
            expression.push_str(if optional {
                "(?:/([^/]+?))?"
            } else {
                "/([^/]+?)"
            });
            keys.push(name);
        } else if ch == '*' {
            expression.push_str(&regex::escape(&literal));
            literal.clear();
            expression.push_str("(.*)");
            keys.push(SPLAT_KEY.to_owned());
        } else {
            literal.push(ch);
        }
    }

    expression.push_str(&regex::escape(&literal));
    expression.push_str("/?$");
    Ok((expression, keys))
}
