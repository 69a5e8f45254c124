//! Code-block / prose segmentation shared by scoped rules.
//!
//! Text is split on the triple-backtick delimiter: segments at even
//! indices are prose, segments at odd indices are fenced code. Rules that
//! must not alter code run on even segments only; code-scoped rules run on
//! odd segments gated by a language-tag predicate read from the segment's
//! first line. The split is a heuristic and assumes balanced fences, which
//! the pipeline guarantees by running the unclosed-fence repair first.

use regex::Regex;

/// Fenced code block delimiter.
pub const FENCE: &str = "```";

/// Apply `repair` to prose segments only, leaving fenced code untouched.
pub fn apply_to_prose<F>(text: &str, repair: F) -> String
where
    F: Fn(&str) -> String,
{
    if !text.contains(FENCE) {
        return repair(text);
    }
    let parts: Vec<String> = text
        .split(FENCE)
        .enumerate()
        .map(|(i, seg)| {
            if i % 2 == 0 {
                repair(seg)
            } else {
                seg.to_string()
            }
        })
        .collect();
    parts.join(FENCE)
}

/// Apply `repair` to the body of fenced code segments whose language tag
/// satisfies `lang_matches`. The tag line itself is preserved verbatim.
pub fn apply_to_code<P, F>(text: &str, lang_matches: P, repair: F) -> String
where
    P: Fn(&str) -> bool,
    F: Fn(&str) -> String,
{
    if !text.contains(FENCE) {
        return text.to_string();
    }
    let parts: Vec<String> = text
        .split(FENCE)
        .enumerate()
        .map(|(i, seg)| {
            if i % 2 == 1
                && let Some((lang, body)) = seg.split_once('\n')
                && lang_matches(lang.trim())
            {
                return format!("{lang}\n{}", repair(body));
            }
            seg.to_string()
        })
        .collect();
    parts.join(FENCE)
}

/// Whether `pattern` matches anywhere in the prose segments of `text`.
pub fn prose_contains(text: &str, pattern: &Regex) -> bool {
    if !text.contains(FENCE) {
        return pattern.is_match(text);
    }
    text.split(FENCE)
        .enumerate()
        .any(|(i, seg)| i % 2 == 0 && pattern.is_match(seg))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shout(s: &str) -> String {
        s.to_ascii_uppercase()
    }

    #[test]
    fn prose_rule_skips_code_segments() {
        let text = "before\n```rust\nlet x = 1;\n```\nafter";
        let out = apply_to_prose(text, |seg| shout(seg));
        assert_eq!(out, "BEFORE\n```rust\nlet x = 1;\n```\nAFTER");
    }

    #[test]
    fn code_rule_respects_language_predicate() {
        let text = "a\n```mermaid\ngraph td\n```\nb\n```rust\nfn f() {}\n```\n";
        let out = apply_to_code(text, |lang| lang.contains("mermaid"), |body| shout(body));
        assert_eq!(out, "a\n```mermaid\nGRAPH TD\n```\nb\n```rust\nfn f() {}\n```\n");
    }

    #[test]
    fn code_rule_preserves_tag_line() {
        let text = "```Mermaid extras\nx\n```";
        let out = apply_to_code(text, |lang| lang.to_ascii_lowercase().contains("mermaid"), |body| {
            shout(body)
        });
        assert_eq!(out, "```Mermaid extras\nX\n```");
    }

    #[test]
    fn unfenced_text_is_a_single_prose_segment() {
        assert_eq!(apply_to_prose("abc", |seg| shout(seg)), "ABC");
        assert_eq!(apply_to_code("abc", |_| true, |seg| shout(seg)), "abc");
    }

    #[test]
    fn prose_match_ignores_code_content() {
        let re = Regex::new(r"<div\b").unwrap();
        assert!(!prose_contains("x\n```html\n<div>\n```\ny", &re));
        assert!(prose_contains("x <div> y", &re));
    }
}
