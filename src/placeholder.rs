//! Placeholder engine for template strings.
//!
//! Template fields of a task spec may embed `${key}` placeholders. This module
//! scans a single string and replaces every placeholder whose key is present
//! in a [`Replacements`] map.
//!
//! # Syntax
//!
//! - `${inputs.params.name}` - a placeholder for key `inputs.params.name`
//! - keys match `[_a-zA-Z][_a-zA-Z0-9.-]*`
//!
//! Anything that does not match (e.g. `${}`, `${ name }`, an unterminated
//! `${name`) is not a placeholder and is copied to the output unchanged.
//!
//! # Resolution
//!
//! Substitution never fails. A placeholder whose key is missing from the map
//! is emitted verbatim, delimiters included. Substituted values are written
//! once and never scanned again, so a value containing `${...}` text appears
//! literally in the output.

use crate::replacements::Replacements;

const OPEN: &str = "${";
const CLOSE: char = '}';

/// A fragment of a scanned template string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'a> {
    /// Text copied as-is.
    Literal(&'a str),
    /// A well-formed placeholder.
    Placeholder {
        /// The key between the delimiters.
        key: &'a str,
        /// The full token, delimiters included.
        raw: &'a str,
    },
}

/// Iterator splitting a template into literal text and placeholders.
struct Segments<'a> {
    rest: &'a str,
}

impl<'a> Segments<'a> {
    fn new(text: &'a str) -> Self {
        Self { rest: text }
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        let Some(start) = self.rest.find(OPEN) else {
            let literal = self.rest;
            self.rest = "";
            return Some(Segment::Literal(literal));
        };

        if start > 0 {
            let (literal, rest) = self.rest.split_at(start);
            self.rest = rest;
            return Some(Segment::Literal(literal));
        }

        // `rest` starts with the opening delimiter
        match parse_key(&self.rest[OPEN.len()..]) {
            Some(key) => {
                let token_len = OPEN.len() + key.len() + CLOSE.len_utf8();
                let (raw, rest) = self.rest.split_at(token_len);
                self.rest = rest;
                Some(Segment::Placeholder { key, raw })
            }
            None => {
                // Not a placeholder: emit the `$` and resume scanning after it,
                // so a nested `${...}` further along is still found.
                let (literal, rest) = self.rest.split_at(1);
                self.rest = rest;
                Some(Segment::Literal(literal))
            }
        }
    }
}

/// Extract the key of a placeholder body (the text following `${`).
fn parse_key(body: &str) -> Option<&str> {
    let end = body.find(CLOSE)?;
    let key = &body[..end];
    is_valid_key(key).then_some(key)
}

/// Check whether `key` is a legal placeholder key.
pub fn is_valid_key(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
}

/// Substitute every resolvable placeholder in `text`.
///
/// # Examples
///
/// ```
/// use taskparams::placeholder::substitute;
/// use taskparams::replacements::Replacements;
///
/// let map: Replacements = [("inputs.params.tag", "v1")].into_iter().collect();
///
/// assert_eq!(substitute("app:${inputs.params.tag}", &map), "app:v1");
/// assert_eq!(substitute("${inputs.params.missing}", &map), "${inputs.params.missing}");
/// ```
pub fn substitute(text: &str, replacements: &Replacements) -> String {
    let mut result = String::with_capacity(text.len());

    for segment in Segments::new(text) {
        match segment {
            Segment::Literal(literal) => result.push_str(literal),
            Segment::Placeholder { key, raw } => match replacements.get(key) {
                Some(value) => result.push_str(value),
                None => result.push_str(raw),
            },
        }
    }

    result
}

/// List the keys of every well-formed placeholder in `text`, in order of
/// appearance. Duplicates are kept.
pub fn references(text: &str) -> Vec<&str> {
    Segments::new(text)
        .filter_map(|segment| match segment {
            Segment::Placeholder { key, .. } => Some(key),
            Segment::Literal(_) => None,
        })
        .collect()
}
