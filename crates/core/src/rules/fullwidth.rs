//! Full-width punctuation substitution (opt-in).
//!
//! Models answering in CJK languages sometimes emit full-width punctuation
//! inside code, which breaks compilers and interpreters. This rule narrows
//! those characters to their ASCII forms, restricted to fenced code
//! bodies. It defaults off because full-width punctuation inside string
//! literals or comments may be intentional.

use crate::segment;

/// Map full-width punctuation to half-width inside fenced code bodies.
pub fn narrow_code_symbols(text: &str) -> String {
    segment::apply_to_code(text, |_| true, |body| {
        body.chars().map(narrow_symbol).collect()
    })
}

fn narrow_symbol(c: char) -> char {
    match c {
        '，' => ',',
        '。' => '.',
        '；' => ';',
        '：' => ':',
        '！' => '!',
        '？' => '?',
        '（' => '(',
        '）' => ')',
        '［' => '[',
        '］' => ']',
        '｛' => '{',
        '｝' => '}',
        '＜' => '<',
        '＞' => '>',
        '＂' => '"',
        '＇' => '\'',
        '｀' => '`',
        '＝' => '=',
        '＋' => '+',
        '－' => '-',
        '＊' => '*',
        '／' => '/',
        '＼' => '\\',
        '％' => '%',
        '＆' => '&',
        '＃' => '#',
        '＠' => '@',
        '＄' => '$',
        '＾' => '^',
        '｜' => '|',
        '～' => '~',
        '　' => ' ',
        other => other,
    }
}
