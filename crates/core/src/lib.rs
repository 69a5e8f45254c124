#![deny(missing_docs)]
//! mdmend core: heuristic repair pipeline for LLM-generated Markdown.
//!
//! Language models routinely emit Markdown with literal `\n` sequences,
//! unclosed code fences, unspaced headings, backslash-style math
//! delimiters, and Mermaid labels that the renderer rejects. This crate
//! repairs those defects with an ordered pipeline of regex and scanner
//! based rules over a shared pre-compiled pattern catalog.
//!
//! The pipeline is pure and synchronous: no I/O, no shared mutable state,
//! safe to call concurrently. It fails closed; if any rule or user
//! cleaner panics, the caller gets the original input back unchanged.
//!
//! ```
//! use mdmend_core::{NormalizerConfig, normalize};
//!
//! let fixed = normalize("#Heading", &NormalizerConfig::default());
//! assert_eq!(fixed, "# Heading");
//! ```

/// Per-call configuration: rule toggles and custom cleaners.
pub mod config;
/// Internal error type for the repair pipeline.
pub mod error;
/// Pre-compiled pattern catalog.
pub mod patterns;
/// Pipeline controller and fix reporting.
pub mod pipeline;
/// Repair rules, one module per defect class.
pub mod rules;
/// Code-block / prose segmentation utilities.
pub mod segment;

pub use config::{CustomCleaner, NormalizerConfig};
pub use error::NormalizeError;
pub use pipeline::{NormalizeReport, normalize, normalize_with_report};
pub use rules::FixKind;
