//! Per-call configuration for the repair pipeline.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// A user-supplied text transform, run after every built-in rule.
///
/// Cleaners are pure string transforms. A panicking cleaner aborts the
/// whole pass and the caller receives the original input unchanged.
pub type CustomCleaner = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Boolean toggles, one per repair rule, plus optional custom cleaners.
///
/// Most rules default on. `list_fix` and `fullwidth_symbol_fix` default
/// off: both rewrite constructs that legitimately occur in plain text, so
/// they carry a higher false-positive risk and are opt-in.
///
/// The flags round-trip through serde so a host can load them from its own
/// config file; cleaner closures are skipped.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Turn literal `\n`/`\t`/`\\`/`\r\n` sequences into real characters.
    pub escape_fix: bool,
    /// Normalize `<think>`/`<thinking>` tags to `<thought>`.
    pub thought_tag_fix: bool,
    /// Guarantee a newline after `</details>` tags.
    pub details_tag_fix: bool,
    /// Repair dedented, glued, or inline-bodied code fences.
    pub code_block_fix: bool,
    /// Rewrite `\[...\]` and `\(...\)` math delimiters to `$`-form.
    pub latex_fix: bool,
    /// Break a numbered list marker off preceding text (opt-in).
    pub list_fix: bool,
    /// Close a dangling code fence at end of text.
    pub unclosed_block_fix: bool,
    /// Map full-width punctuation to half-width inside code (opt-in).
    pub fullwidth_symbol_fix: bool,
    /// Re-quote Mermaid node labels and balance subgraph/end pairs.
    pub mermaid_fix: bool,
    /// Insert the missing space after heading `#` markers.
    pub heading_fix: bool,
    /// Append the missing trailing `|` on table rows.
    pub table_fix: bool,
    /// Strip known vendor artifact wrapper tags.
    pub xml_tag_cleanup: bool,
    /// Collapse stray whitespace inside `**bold**`-style markers.
    pub emphasis_spacing_fix: bool,
    /// User transforms applied last, in order.
    #[serde(skip)]
    pub custom_cleaners: Vec<CustomCleaner>,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        NormalizerConfig {
            escape_fix: true,
            thought_tag_fix: true,
            details_tag_fix: true,
            code_block_fix: true,
            latex_fix: true,
            list_fix: false,
            unclosed_block_fix: true,
            fullwidth_symbol_fix: false,
            mermaid_fix: true,
            heading_fix: true,
            table_fix: true,
            xml_tag_cleanup: true,
            emphasis_spacing_fix: true,
            custom_cleaners: Vec::new(),
        }
    }
}

impl NormalizerConfig {
    /// Configuration with every rule disabled. Useful for enabling rules
    /// one at a time.
    pub fn disabled() -> Self {
        NormalizerConfig {
            escape_fix: false,
            thought_tag_fix: false,
            details_tag_fix: false,
            code_block_fix: false,
            latex_fix: false,
            list_fix: false,
            unclosed_block_fix: false,
            fullwidth_symbol_fix: false,
            mermaid_fix: false,
            heading_fix: false,
            table_fix: false,
            xml_tag_cleanup: false,
            emphasis_spacing_fix: false,
            custom_cleaners: Vec::new(),
        }
    }

    /// Append a custom cleaner, keeping insertion order.
    pub fn with_cleaner<F>(mut self, cleaner: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.custom_cleaners.push(Arc::new(cleaner));
        self
    }
}

impl fmt::Debug for NormalizerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NormalizerConfig")
            .field("escape_fix", &self.escape_fix)
            .field("thought_tag_fix", &self.thought_tag_fix)
            .field("details_tag_fix", &self.details_tag_fix)
            .field("code_block_fix", &self.code_block_fix)
            .field("latex_fix", &self.latex_fix)
            .field("list_fix", &self.list_fix)
            .field("unclosed_block_fix", &self.unclosed_block_fix)
            .field("fullwidth_symbol_fix", &self.fullwidth_symbol_fix)
            .field("mermaid_fix", &self.mermaid_fix)
            .field("heading_fix", &self.heading_fix)
            .field("table_fix", &self.table_fix)
            .field("xml_tag_cleanup", &self.xml_tag_cleanup)
            .field("emphasis_spacing_fix", &self.emphasis_spacing_fix)
            .field("custom_cleaners", &self.custom_cleaners.len())
            .finish()
    }
}
