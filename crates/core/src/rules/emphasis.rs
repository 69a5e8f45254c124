//! Emphasis marker spacing.
//!
//! `** bold **` does not render as bold; the inner whitespace must go.
//! Only runs of 2-3 identical marker characters are candidates: a single
//! `*` or `_` flanked by spaces is treated as a literal operator, and a
//! list-marker `*` followed by a space never merges into an adjacent bold
//! run. Prose segments only.

use regex::{Captures, Regex};

use crate::patterns::catalog;
use crate::segment;

/// Collapse stray whitespace just inside 2-3 character emphasis markers.
pub fn tighten_markers(text: &str) -> String {
    segment::apply_to_prose(text, |prose| {
        let cat = catalog();
        // Triple markers first so `*** x ***` is not half-consumed as bold.
        let prose = tighten(&cat.strong_em_star, prose, "***");
        let prose = tighten(&cat.strong_star, &prose, "**");
        let prose = tighten(&cat.strong_em_underscore, &prose, "___");
        tighten(&cat.strong_underscore, &prose, "__")
    })
}

fn tighten(pattern: &Regex, text: &str, marker: &str) -> String {
    pattern
        .replace_all(text, |caps: &Captures<'_>| {
            format!("{marker}{}{marker}", &caps[1])
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::tighten_markers;

    #[test]
    fn collapses_inner_whitespace() {
        assert_eq!(tighten_markers("** bold **"), "**bold**");
        assert_eq!(tighten_markers("__ under __"), "__under__");
        assert_eq!(tighten_markers("*** both ***"), "***both***");
    }

    #[test]
    fn inner_spacing_of_text_is_kept() {
        assert_eq!(tighten_markers("** bold words **"), "**bold words**");
    }

    #[test]
    fn list_marker_before_bold_untouched() {
        let text = "*   **Yes**";
        assert_eq!(tighten_markers(text), text);
    }

    #[test]
    fn single_markers_flanked_by_spaces_untouched() {
        let text = "a * b * c and x _ y _ z";
        assert_eq!(tighten_markers(text), text);
    }

    #[test]
    fn tight_emphasis_is_stable() {
        let text = "**bold** and __under__ and ***em***";
        assert_eq!(tighten_markers(text), text);
    }

    #[test]
    fn markers_in_code_untouched() {
        let text = "```python\nx = 2 ** 8\n```";
        assert_eq!(tighten_markers(text), text);
    }
}
