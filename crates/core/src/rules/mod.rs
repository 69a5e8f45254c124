//! Repair rules, one module per defect class.

use std::fmt;

/// Escape-sequence repair.
pub mod escape;
/// Thought/details/artifact tag handling.
pub mod tags;
/// Code fence repair and dangling-fence closing.
pub mod code_block;
/// LaTeX delimiter normalization.
pub mod latex;
/// Numbered list newline repair.
pub mod list;
/// Full-width punctuation substitution inside code.
pub mod fullwidth;
/// Mermaid node re-quoting and subgraph balance repair.
pub mod mermaid;
/// Heading marker spacing.
pub mod heading;
/// Table row pipe repair.
pub mod table;
/// Emphasis marker spacing.
pub mod emphasis;

/// Identifies a rule that changed the text during a pass.
///
/// The ordered list of these is the observability side-channel a host can
/// turn into user-facing status messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixKind {
    /// Literal escape sequences turned into control characters.
    Escape,
    /// Thought tags normalized.
    ThoughtTag,
    /// Details tag spacing repaired.
    DetailsTag,
    /// Code fence placement repaired.
    CodeBlock,
    /// LaTeX delimiters rewritten to `$`-form.
    Latex,
    /// Numbered list marker broken onto its own line.
    ListItem,
    /// Dangling code fence closed.
    UnclosedFence,
    /// Full-width punctuation narrowed inside code.
    FullwidthSymbol,
    /// Mermaid block repaired.
    Mermaid,
    /// Heading marker spacing inserted.
    Heading,
    /// Table row pipe appended.
    Table,
    /// Artifact wrapper tags removed.
    XmlTag,
    /// Emphasis marker whitespace collapsed.
    EmphasisSpacing,
    /// A user-supplied cleaner changed the text.
    CustomCleaner,
}

impl FixKind {
    /// Short human-readable label for status reporting.
    pub fn label(self) -> &'static str {
        match self {
            FixKind::Escape => "escape characters",
            FixKind::ThoughtTag => "thought tags",
            FixKind::DetailsTag => "details spacing",
            FixKind::CodeBlock => "code fences",
            FixKind::Latex => "latex delimiters",
            FixKind::ListItem => "list breaks",
            FixKind::UnclosedFence => "unclosed fence",
            FixKind::FullwidthSymbol => "full-width symbols",
            FixKind::Mermaid => "mermaid syntax",
            FixKind::Heading => "heading spacing",
            FixKind::Table => "table pipes",
            FixKind::XmlTag => "artifact tags",
            FixKind::EmphasisSpacing => "emphasis spacing",
            FixKind::CustomCleaner => "custom cleaner",
        }
    }
}

impl fmt::Display for FixKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
