//! Escape-character repair.
//!
//! Some models emit `\n`, `\t`, `\r\n`, or `\\` as two-character literal
//! sequences instead of real control characters. This rule runs first in
//! the pipeline: every later rule matches on logical line structure, which
//! does not exist until these sequences are decoded.
//!
//! Decoding is a single left-to-right pass over an ordered alternation
//! (longest sequence first), so doubly-escaped input resolves one level
//! per call rather than collapsing all the way down.

use regex::Captures;

use crate::patterns::catalog;

/// Replace literal escape sequences with the characters they denote.
pub fn unescape_literals(text: &str) -> String {
    catalog()
        .escape_sequence
        .replace_all(text, |caps: &Captures<'_>| match &caps[0] {
            "\\r\\n" | "\\n" => "\n".to_string(),
            "\\t" => "\t".to_string(),
            "\\\\" => "\\".to_string(),
            other => other.to_string(),
        })
        .into_owned()
}
