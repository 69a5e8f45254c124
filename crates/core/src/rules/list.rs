//! Numbered list newline repair (opt-in).
//!
//! Breaks a `1. item` marker off the text it is glued to. Ordinary prose
//! like "see item 2. Also" matches the same shape, so this rule defaults
//! off in [`crate::NormalizerConfig`].

use crate::patterns::catalog;

/// Insert a newline before a numbered list marker glued to preceding text.
pub fn break_glued_items(text: &str) -> String {
    catalog().list_glued.replace_all(text, "$1\n$2").into_owned()
}

#[cfg(test)]
mod tests {
    use super::break_glued_items;

    #[test]
    fn splits_glued_markers() {
        assert_eq!(
            break_glued_items("steps: 1. wash 2. rinse"),
            "steps:\n1. wash\n2. rinse"
        );
    }

    #[test]
    fn marker_at_line_start_untouched() {
        let text = "1. first\n2. second";
        assert_eq!(break_glued_items(text), text);
    }

    #[test]
    fn decimals_untouched() {
        let text = "pi is 3.14 about";
        assert_eq!(break_glued_items(text), text);
    }

    #[test]
    fn multidigit_marker_not_split_internally() {
        let text = "12. twelfth";
        assert_eq!(break_glued_items(text), text);
    }
}
