//! Pipeline controller: fixed rule order, fix tracking, failure isolation.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use log::{debug, warn};

use crate::config::NormalizerConfig;
use crate::error::NormalizeError;
use crate::patterns::catalog;
use crate::rules::{self, FixKind};
use crate::segment;

/// Result of one repair pass: the text plus which rules changed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeReport {
    /// The repaired text (identical to the input when nothing applied).
    pub text: String,
    /// Rules that changed the text, in application order.
    pub applied: Vec<FixKind>,
}

impl NormalizeReport {
    fn untouched(text: &str) -> Self {
        NormalizeReport {
            text: text.to_string(),
            applied: Vec::new(),
        }
    }

    /// Whether any rule changed the text.
    pub fn changed(&self) -> bool {
        !self.applied.is_empty()
    }

    /// Human-readable labels for the applied fixes, in order.
    pub fn labels(&self) -> Vec<&'static str> {
        self.applied.iter().map(|fix| fix.label()).collect()
    }
}

/// Repair `text` and return only the resulting string.
pub fn normalize(text: &str, config: &NormalizerConfig) -> String {
    normalize_with_report(text, config).text
}

/// Repair `text`, reporting which rules changed it.
///
/// Empty input comes back unchanged. If the text contains a common HTML
/// block tag outside fenced code, the whole pass is skipped rather than
/// risk corrupting embedded markup. If any rule or custom cleaner panics,
/// the original input comes back untouched; a failed pass never returns
/// partially transformed content.
pub fn normalize_with_report(text: &str, config: &NormalizerConfig) -> NormalizeReport {
    if text.is_empty() {
        return NormalizeReport::untouched(text);
    }
    if segment::prose_contains(text, &catalog().html_block_tag) {
        debug!("html block tag found; skipping markdown repair");
        return NormalizeReport::untouched(text);
    }
    match run_pass(text, config) {
        Ok(report) => report,
        Err(err) => {
            warn!("markdown repair failed, returning original text: {err}");
            NormalizeReport::untouched(text)
        }
    }
}

fn run_pass(text: &str, config: &NormalizerConfig) -> Result<NormalizeReport, NormalizeError> {
    panic::catch_unwind(AssertUnwindSafe(|| apply_rules(text, config)))
        .map_err(|payload| NormalizeError::PassPanicked(panic_message(payload.as_ref())))
}

/// Fixed rule order. Each step feeds the next: escapes are decoded before
/// anything matches on line structure, fences are balanced before the
/// segment-scoped rules split on them, and custom cleaners always run last.
fn apply_rules(text: &str, config: &NormalizerConfig) -> NormalizeReport {
    type Rule = fn(&str) -> String;
    let steps: [(bool, FixKind, Rule); 13] = [
        (config.escape_fix, FixKind::Escape, rules::escape::unescape_literals),
        (config.thought_tag_fix, FixKind::ThoughtTag, rules::tags::normalize_thought_tags),
        (config.details_tag_fix, FixKind::DetailsTag, rules::tags::space_details_tags),
        (config.code_block_fix, FixKind::CodeBlock, rules::code_block::repair_fences),
        (config.latex_fix, FixKind::Latex, rules::latex::normalize_delimiters),
        (config.list_fix, FixKind::ListItem, rules::list::break_glued_items),
        (config.unclosed_block_fix, FixKind::UnclosedFence, rules::code_block::close_dangling_fence),
        (config.fullwidth_symbol_fix, FixKind::FullwidthSymbol, rules::fullwidth::narrow_code_symbols),
        (config.mermaid_fix, FixKind::Mermaid, rules::mermaid::repair_blocks),
        (config.heading_fix, FixKind::Heading, rules::heading::space_heading_markers),
        (config.table_fix, FixKind::Table, rules::table::close_row_pipes),
        (config.xml_tag_cleanup, FixKind::XmlTag, rules::tags::strip_artifact_tags),
        (config.emphasis_spacing_fix, FixKind::EmphasisSpacing, rules::emphasis::tighten_markers),
    ];

    let mut current = text.to_string();
    let mut applied = Vec::new();
    for (enabled, kind, rule) in steps {
        if !enabled {
            continue;
        }
        let next = rule(&current);
        if next != current {
            applied.push(kind);
            current = next;
        }
    }
    for cleaner in &config.custom_cleaners {
        let next = cleaner(&current);
        if next != current {
            applied.push(FixKind::CustomCleaner);
            current = next;
        }
    }
    NormalizeReport {
        text: current,
        applied,
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
