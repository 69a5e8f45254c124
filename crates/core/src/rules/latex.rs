//! LaTeX delimiter normalization.
//!
//! Rewrites `\[ ... \]` to `$$ ... $$` and `\( ... \)` to `$ ... $` for
//! renderers that only understand dollar-style math delimiters. Block
//! spans may cross lines; both forms match non-greedily.

use regex::Captures;

use crate::patterns::catalog;

/// Rewrite backslash-bracket math delimiters to dollar form.
pub fn normalize_delimiters(text: &str) -> String {
    let cat = catalog();
    let text = cat
        .latex_block
        .replace_all(text, |caps: &Captures<'_>| format!("$${}$$", &caps[1]));
    cat.latex_inline
        .replace_all(&text, |caps: &Captures<'_>| format!("${}$", &caps[1]))
        .into_owned()
}
