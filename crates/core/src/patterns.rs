//! Pre-compiled pattern catalog shared by every repair rule.
//!
//! All regular expressions live here, compiled once behind a `Lazy` and
//! handed out read-only. Rules never build patterns at call time.

use once_cell::sync::Lazy;
use regex::Regex;

/// Named regular expressions used by the repair rules.
///
/// Bracketed/fenced spans use non-greedy quantifiers so a match never
/// overruns to a later, unrelated closing delimiter. Tag-name matching
/// is case-insensitive.
pub struct PatternCatalog {
    /// Literal escape sequences (`\r\n`, `\n`, `\t`, `\\`) as an ordered
    /// alternation, longest first.
    pub escape_sequence: Regex,
    /// Opening `<think>` / `<thinking>` tags.
    pub thought_open: Regex,
    /// Closing `</think>` / `</thinking>` tags.
    pub thought_close: Regex,
    /// `</thought>` not followed by a blank line before more content.
    pub thought_gap: Regex,
    /// `</details>` or self-closing `<details .../>` glued to following text.
    pub details_gap: Regex,
    /// Leading indentation before a fence at line start.
    pub fence_indent: Regex,
    /// A fence glued to preceding non-newline text.
    pub fence_glued: Regex,
    /// A language-tagged fence opener with inline content on the same line.
    pub fence_inline_body: Regex,
    /// Block math delimiters `\[ ... \]`.
    pub latex_block: Regex,
    /// Inline math delimiters `\( ... \)`.
    pub latex_inline: Regex,
    /// A numbered list marker glued to preceding text.
    pub list_glued: Regex,
    /// A heading marker run missing the space before its text.
    pub heading_space: Regex,
    /// Known artifact wrapper tags emitted by some model vendors.
    pub artifact_tags: Regex,
    /// `***bold italic***` span with stray inner whitespace.
    pub strong_em_star: Regex,
    /// `**bold**` span with stray inner whitespace.
    pub strong_star: Regex,
    /// `___bold italic___` span with stray inner whitespace.
    pub strong_em_underscore: Regex,
    /// `__bold__` span with stray inner whitespace.
    pub strong_underscore: Regex,
    /// Common HTML block tags; triggers the whole-document opt-out.
    pub html_block_tag: Regex,
    /// Whole-word `subgraph` keyword inside a Mermaid block.
    pub mermaid_subgraph: Regex,
    /// Whole-word `end` keyword inside a Mermaid block.
    pub mermaid_end: Regex,
}

static CATALOG: Lazy<PatternCatalog> = Lazy::new(|| PatternCatalog {
    escape_sequence: Regex::new(r"\\(?:r\\n|n|t|\\)").unwrap(),
    thought_open: Regex::new(r"(?i)<think(?:ing)?>").unwrap(),
    thought_close: Regex::new(r"(?i)</think(?:ing)?>").unwrap(),
    thought_gap: Regex::new(r"(?i)(</thought>)\n?([^\n])").unwrap(),
    details_gap: Regex::new(r"(?i)(</details>|<details\b[^>]*/>)([^\n])").unwrap(),
    fence_indent: Regex::new(r"(?m)^[ \t]+```").unwrap(),
    fence_glued: Regex::new(r"([^`\n])```").unwrap(),
    fence_inline_body: Regex::new(r"(?m)^(```[A-Za-z0-9_+#.-]+)[ \t]+(\S)").unwrap(),
    latex_block: Regex::new(r"(?s)\\\[(.+?)\\\]").unwrap(),
    latex_inline: Regex::new(r"\\\((.+?)\\\)").unwrap(),
    list_glued: Regex::new(r"([^\n\d])[ \t]*(\d+\.[ \t])").unwrap(),
    heading_space: Regex::new(r"(?m)^(#{1,6})([^#\s])").unwrap(),
    artifact_tags: Regex::new(
        r"(?i)</?(?:content|answer|response|output|final_answer)>|<\|(?:im_start|im_end|begin_of_box|end_of_box)\|>",
    )
    .unwrap(),
    strong_em_star: Regex::new(r"\*\*\*[ \t]*([^*\n]*?)[ \t]*\*\*\*").unwrap(),
    strong_star: Regex::new(r"\*\*[ \t]*([^*\n]*?)[ \t]*\*\*").unwrap(),
    strong_em_underscore: Regex::new(r"___[ \t]*([^_\n]*?)[ \t]*___").unwrap(),
    strong_underscore: Regex::new(r"__[ \t]*([^_\n]*?)[ \t]*__").unwrap(),
    html_block_tag: Regex::new(
        r"(?i)<(?:div|span|table|thead|tbody|tfoot|tr|td|th|ul|ol|li|p|br|hr|img|h[1-6]|blockquote|pre|center|iframe|script|style|section|article|html|body|a)[\s>/]",
    )
    .unwrap(),
    mermaid_subgraph: Regex::new(r"(?i)\bsubgraph\b").unwrap(),
    mermaid_end: Regex::new(r"(?i)\bend\b").unwrap(),
});

/// Shared immutable catalog, built on first use.
pub fn catalog() -> &'static PatternCatalog {
    &CATALOG
}
