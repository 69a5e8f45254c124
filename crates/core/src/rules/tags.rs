//! Pseudo-XML tag repair: thought tags, details spacing, artifact cleanup.

use crate::patterns::catalog;
use crate::segment;

/// Rewrite `<think>`/`<thinking>` pairs to `<thought>` and guarantee a
/// blank line between the closing tag and the answer that follows it.
pub fn normalize_thought_tags(text: &str) -> String {
    let cat = catalog();
    let text = cat.thought_open.replace_all(text, "<thought>");
    let text = cat.thought_close.replace_all(&text, "</thought>");
    cat.thought_gap.replace_all(&text, "$1\n\n$2").into_owned()
}

/// Guarantee a newline after `</details>` and self-closing `<details .../>`
/// so following content starts its own block. Prose segments only; a
/// details tag quoted inside a code fence stays untouched.
pub fn space_details_tags(text: &str) -> String {
    segment::apply_to_prose(text, |prose| {
        catalog().details_gap.replace_all(prose, "$1\n$2").into_owned()
    })
}

/// Remove known vendor artifact wrapper tags anywhere in the text.
pub fn strip_artifact_tags(text: &str) -> String {
    catalog().artifact_tags.replace_all(text, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrites_think_pair_and_inserts_blank_line() {
        assert_eq!(
            normalize_thought_tags("<think>Deep thinking...</think>Result"),
            "<thought>Deep thinking...</thought>\n\nResult"
        );
    }

    #[test]
    fn thinking_variant_and_mixed_case_are_normalized() {
        assert_eq!(
            normalize_thought_tags("<THINKING>x</Thinking>"),
            "<thought>x</thought>"
        );
    }

    #[test]
    fn existing_blank_line_is_not_doubled() {
        let text = "<thought>x</thought>\n\nResult";
        assert_eq!(normalize_thought_tags(text), text);
    }

    #[test]
    fn single_newline_after_close_is_widened() {
        assert_eq!(
            normalize_thought_tags("<thought>x</thought>\nResult"),
            "<thought>x</thought>\n\nResult"
        );
    }

    #[test]
    fn details_close_gets_newline() {
        assert_eq!(
            space_details_tags("</details>Next paragraph"),
            "</details>\nNext paragraph"
        );
        assert_eq!(
            space_details_tags("<details open/>body"),
            "<details open/>\nbody"
        );
    }

    #[test]
    fn details_inside_fence_untouched() {
        let text = "```html\n</details>inline\n```";
        assert_eq!(space_details_tags(text), text);
    }

    #[test]
    fn strips_wrapper_and_sentinel_tags() {
        assert_eq!(strip_artifact_tags("<answer>42</answer>"), "42");
        assert_eq!(
            strip_artifact_tags("<|begin_of_box|>x<|end_of_box|>"),
            "x"
        );
    }

    #[test]
    fn unlisted_tags_survive() {
        let text = "<thought>keep</thought>";
        assert_eq!(strip_artifact_tags(text), text);
    }
}
