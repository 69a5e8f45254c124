//! Mermaid syntax repair.
//!
//! Mermaid rejects node labels containing CJK text, parentheses, or other
//! reserved characters unless the label is double-quoted. This rule finds
//! every `id<open>label<close>` node declaration with an unquoted label
//! inside a ```mermaid fence and wraps the label in quotes, keeping the
//! shape delimiter tokens byte-identical. Already-quoted labels pass
//! through verbatim. Afterwards, missing `end` lines are appended when a
//! block opens more `subgraph`s than it closes.
//!
//! The node scanner is a small hand-rolled lexer rather than a regex
//! alternation: delimiter pairs share prefixes (`(((` vs `((` vs `(`), so
//! matching must try longer openers first, and quoted spans need
//! escape-aware skipping that a single pattern cannot express. Nested
//! same-type brackets cannot be balanced without a real parser; a node
//! whose label would nest its own bracket kind is left unmodified.

use crate::patterns::catalog;
use crate::segment;

/// Repair every fenced block whose language tag contains `mermaid`.
pub fn repair_blocks(text: &str) -> String {
    segment::apply_to_code(
        text,
        |lang| lang.to_ascii_lowercase().contains("mermaid"),
        repair_block,
    )
}

/// Shape delimiter pairs, longest opener first.
///
/// Order matters: trying `(` before `(((` would mis-parse a double-circle
/// node as a round node wrapping a round node and corrupt the shape.
/// Parallelogram/trapezoid variants accept either slash closer.
const SHAPE_DELIMITERS: &[(&str, &[&str])] = &[
    ("(((", &[")))"]),
    ("((", &["))"]),
    ("([", &["])"]),
    ("[(", &[")]"]),
    ("[[", &["]]"]),
    ("{{", &["}}"]),
    ("[/", &["/]", "\\]"]),
    ("[\\", &["\\]", "/]"]),
    ("(", &[")"]),
    ("[", &["]"]),
    ("{", &["}"]),
    (">", &["]"]),
];

/// Repair one Mermaid block body (fence markers and tag line excluded).
fn repair_block(body: &str) -> String {
    let lines: Vec<String> = body.split('\n').map(quote_line).collect();
    let mut out = lines.join("\n");

    // Subgraph balance repair. Keyword counting does not exclude
    // occurrences inside quoted labels; known limitation.
    let cat = catalog();
    let subgraphs = cat.mermaid_subgraph.find_iter(&out).count();
    let ends = cat.mermaid_end.find_iter(&out).count();
    if subgraphs > ends {
        if !out.ends_with('\n') {
            out.push('\n');
        }
        for _ in 0..subgraphs - ends {
            out.push_str("end\n");
        }
    }
    out
}

/// Quote every unquoted shaped-node label on one line.
///
/// Bare identifiers (`A --> B`) have no label and are never touched.
fn quote_line(line: &str) -> String {
    let trimmed = line.trim_start();
    if trimmed.starts_with("%%") {
        return line.to_string();
    }

    let bytes = line.as_bytes();
    let mut out = String::with_capacity(line.len() + 8);
    let mut copied = 0;
    let mut i = 0;
    while i < bytes.len() {
        // Skip quoted spans wholesale so labels that are already quoted
        // are never re-scanned for node syntax.
        if bytes[i] == b'"' {
            i = skip_quoted(bytes, i);
            continue;
        }
        if is_ident_byte(bytes[i]) && (i == 0 || !is_ident_byte(bytes[i - 1])) {
            let mut id_end = i;
            while id_end < bytes.len() && is_ident_byte(bytes[id_end]) {
                id_end += 1;
            }
            match scan_node(line, i, id_end) {
                NodeScan::Rewrite(node_end, replacement) => {
                    out.push_str(&line[copied..i]);
                    out.push_str(&replacement);
                    copied = node_end;
                    i = node_end;
                }
                NodeScan::Skip(node_end) => i = node_end,
                NodeScan::NoNode => i = id_end,
            }
            continue;
        }
        i += 1;
    }
    out.push_str(&line[copied..]);
    out
}

fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Advance past a double-quoted span starting at `start`, honoring `\"`.
fn skip_quoted(bytes: &[u8], start: usize) -> usize {
    let mut i = start + 1;
    while i < bytes.len() {
        if bytes[i] == b'"' && bytes[i - 1] != b'\\' {
            return i + 1;
        }
        i += 1;
    }
    start + 1
}

/// Outcome of scanning one identifier for a shaped-node declaration.
enum NodeScan {
    /// No shape delimiter follows the identifier; resume after it.
    NoNode,
    /// A node was found but must stay as-is; resume after its closer.
    Skip(usize),
    /// Replace the span ending at the given offset with new text.
    Rewrite(usize, String),
}

/// Scan the shaped node whose identifier spans `id_start..id_end`.
///
/// A label that is already quoted, or that nests its own bracket kind
/// (ambiguous without a real parser), leaves the node unmodified.
fn scan_node(line: &str, id_start: usize, id_end: usize) -> NodeScan {
    let rest = &line[id_end..];
    let Some(&(opener, closers)) = SHAPE_DELIMITERS
        .iter()
        .find(|(opener, _)| rest.starts_with(*opener))
    else {
        return NodeScan::NoNode;
    };

    let label_start = id_end + opener.len();
    let after = &line[label_start..];

    // Fully quoted label: pass through verbatim, no re-quoting. The main
    // loop's quote skipping steps over the label content.
    if after.starts_with('"') {
        return NodeScan::NoNode;
    }

    let Some((label_end, citation, close_at, closer)) =
        find_label_end(line, label_start, closers)
    else {
        return NodeScan::NoNode;
    };
    let label = &line[label_start..label_end];
    let node_end = close_at + closer.len();

    if label.trim().is_empty() {
        return NodeScan::Skip(node_end);
    }
    // Same-type nesting (e.g. `{a{b}c}`) cannot be balanced here; leave
    // the whole span alone rather than quote a fragment of it.
    if opener
        .chars()
        .any(|c| matches!(c, '(' | '[' | '{') && label.contains(c))
    {
        return NodeScan::Skip(node_end);
    }

    let mut quoted = String::with_capacity(label.len() + 4);
    quoted.push('"');
    quoted.push_str(&label.replace('"', "\\\""));
    if let Some(citation) = citation {
        quoted.push_str(citation);
    }
    quoted.push('"');

    let replacement = format!("{}{opener}{quoted}{closer}", &line[id_start..id_end]);
    NodeScan::Rewrite(node_end, replacement)
}

/// Locate the label end, an optional `[digits]` citation marker, and the
/// closing delimiter, scanning left to right from `label_start`.
///
/// Returns `(label_end, citation, close_at, closer)` where `close_at` is
/// the byte offset of the closing delimiter token.
fn find_label_end<'l, 'c>(
    line: &'l str,
    label_start: usize,
    closers: &[&'c str],
) -> Option<(usize, Option<&'l str>, usize, &'c str)> {
    let mut k = label_start;
    while k < line.len() {
        let tail = &line[k..];
        // A citation directly before the closer is folded into the label.
        if tail.starts_with('[')
            && let Some(citation_len) = citation_len(tail)
        {
            let after_citation = &line[k + citation_len..];
            if let Some(closer) = closers
                .iter()
                .copied()
                .find(|c| after_citation.starts_with(*c))
            {
                return Some((k, Some(&line[k..k + citation_len]), k + citation_len, closer));
            }
        }
        if let Some(closer) = closers.iter().copied().find(|c| tail.starts_with(*c)) {
            return Some((k, None, k, closer));
        }
        k += utf8_len(line.as_bytes()[k]);
    }
    None
}

fn citation_len(tail: &str) -> Option<usize> {
    let digits = tail[1..].bytes().take_while(u8::is_ascii_digit).count();
    if digits > 0 && tail.as_bytes().get(1 + digits) == Some(&b']') {
        Some(digits + 2)
    } else {
        None
    }
}

fn utf8_len(b: u8) -> usize {
    match b {
        0x00..=0x7f => 1,
        0xc0..=0xdf => 2,
        0xe0..=0xef => 3,
        _ => 4,
    }
}

#[cfg(test)]
mod tests {
    use super::{quote_line, repair_blocks};

    fn fenced(body: &str) -> String {
        format!("```mermaid\n{body}\n```")
    }

    #[test]
    fn quotes_cjk_labels_preserving_shapes() {
        assert_eq!(
            quote_line("Start((开始)) --> Input[[输入]]"),
            "Start((\"开始\")) --> Input[[\"输入\"]]"
        );
    }

    #[test]
    fn longer_delimiters_win_over_shared_prefixes() {
        assert_eq!(quote_line("A(((core)))"), "A(((\"core\")))");
        assert_eq!(quote_line("B((ring))"), "B((\"ring\"))");
        assert_eq!(quote_line("C(round)"), "C(\"round\")");
    }

    #[test]
    fn every_shape_keeps_its_delimiters() {
        let cases = [
            ("(((", ")))"),
            ("((", "))"),
            ("([", "])"),
            ("[(", ")]"),
            ("[[", "]]"),
            ("{{", "}}"),
            ("[/", "/]"),
            ("[\\", "\\]"),
            ("[/", "\\]"),
            ("[\\", "/]"),
            ("(", ")"),
            ("[", "]"),
            ("{", "}"),
            (">", "]"),
        ];
        for (open, close) in cases {
            let input = format!("N{open}标签{close}");
            let expected = format!("N{open}\"标签\"{close}");
            assert_eq!(quote_line(&input), expected, "shape {open}...{close}");
        }
    }

    #[test]
    fn quoted_labels_pass_through_verbatim() {
        let line = "A(\"already quoted\") --> B[\"也引用\"]";
        assert_eq!(quote_line(line), line);
    }

    #[test]
    fn bare_identifiers_untouched() {
        let line = "A --> B";
        assert_eq!(quote_line(line), line);
    }

    #[test]
    fn citation_lands_inside_the_quotes() {
        assert_eq!(quote_line("A(Result[1])"), "A(\"Result[1]\")");
        assert_eq!(quote_line("B[Claim[12]]"), "B[\"Claim[12]\"]");
    }

    #[test]
    fn embedded_quotes_are_escaped() {
        assert_eq!(quote_line("A(say \"hi\")"), "A(\"say \\\"hi\\\"\")");
    }

    #[test]
    fn nested_same_type_brackets_left_alone() {
        assert_eq!(quote_line("A(f(x))"), "A(f(x))");
    }

    #[test]
    fn unclosed_shape_left_alone() {
        assert_eq!(quote_line("A(unclosed"), "A(unclosed");
    }

    #[test]
    fn comment_lines_untouched() {
        let line = "%% A(raw comment)";
        assert_eq!(quote_line(line), line);
    }

    #[test]
    fn requoting_is_idempotent() {
        let once = quote_line("X{判断} --> Y>旗]");
        assert_eq!(quote_line(&once), once);
    }

    #[test]
    fn appends_missing_subgraph_ends() {
        let text = fenced("subgraph One\nA --> B\nsubgraph Two\nC --> D\nend");
        let fixed = repair_blocks(&text);
        assert_eq!(
            fixed,
            "```mermaid\nsubgraph One\nA --> B\nsubgraph Two\nC --> D\nend\nend\n```"
        );
    }

    #[test]
    fn balanced_subgraphs_untouched() {
        let text = fenced("subgraph One\nA --> B\nend");
        assert_eq!(repair_blocks(&text), text);
    }

    #[test]
    fn non_mermaid_blocks_untouched() {
        let text = "```python\ndata[(0)]\n```";
        assert_eq!(repair_blocks(text), text);
    }

    #[test]
    fn text_outside_the_fence_untouched() {
        let text = "A(outside)\n```mermaid\nA(内)\n```\nB(outside)";
        assert_eq!(
            repair_blocks(text),
            "A(outside)\n```mermaid\nA(\"内\")\n```\nB(outside)"
        );
    }
}
