//! Heading marker spacing.
//!
//! `#Heading` renders as plain text; insert the missing space after the
//! leading `#` run. Prose segments only, so comment markers like `#TODO`
//! inside fenced code stay untouched.

use crate::patterns::catalog;
use crate::segment;

/// Insert a space between a line-leading `#` run and its heading text.
pub fn space_heading_markers(text: &str) -> String {
    segment::apply_to_prose(text, |prose| {
        catalog().heading_space.replace_all(prose, "$1 $2").into_owned()
    })
}
