//! Code fence repair.
//!
//! Three placement defects plus the dangling-fence case:
//! - a fence indented at line start (renderers treat it as indented code),
//! - a fence glued to the end of a text line,
//! - inline content on the same line as a language-tagged opener,
//! - an opening fence that never closes.

use crate::patterns::catalog;

/// Repair fence placement: dedent, break off preceding text, and move
/// inline content below the language tag.
pub fn repair_fences(text: &str) -> String {
    let cat = catalog();
    let text = cat.fence_indent.replace_all(text, "```");
    let text = cat.fence_glued.replace_all(&text, "$1\n```");
    cat.fence_inline_body
        .replace_all(&text, "$1\n$2")
        .into_owned()
}

/// Append a closing fence when the total fence-marker count is odd.
pub fn close_dangling_fence(text: &str) -> String {
    if text.matches("```").count() % 2 == 0 {
        return text.to_string();
    }
    if text.ends_with('\n') {
        format!("{text}```")
    } else {
        format!("{text}\n```")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedents_indented_fence() {
        assert_eq!(
            repair_fences("    ```rust\n    code\n    ```"),
            "```rust\n    code\n```"
        );
    }

    #[test]
    fn breaks_fence_off_text_line() {
        assert_eq!(repair_fences("result:```python"), "result:\n```python");
    }

    #[test]
    fn moves_inline_body_below_language_tag() {
        assert_eq!(
            repair_fences("```python print('x')\n```"),
            "```python\nprint('x')\n```"
        );
    }

    #[test]
    fn well_formed_fences_untouched() {
        let text = "```python\nprint('x')\n```";
        assert_eq!(repair_fences(text), text);
    }

    #[test]
    fn closes_dangling_fence_on_own_line() {
        assert_eq!(
            close_dangling_fence("```python\nprint('hello')"),
            "```python\nprint('hello')\n```"
        );
        assert_eq!(close_dangling_fence("```\ncode\n"), "```\ncode\n```");
    }

    #[test]
    fn balanced_text_gains_no_fence() {
        let text = "```\ncode\n```\n";
        assert_eq!(close_dangling_fence(text), text);
        assert_eq!(close_dangling_fence("plain"), "plain");
    }

    #[test]
    fn fence_count_is_even_after_repair() {
        for text in ["```", "a```b```c```", "x", "```rust\nfn f() {}"] {
            let fixed = close_dangling_fence(text);
            assert_eq!(fixed.matches("```").count() % 2, 0, "input: {text:?}");
        }
    }
}
