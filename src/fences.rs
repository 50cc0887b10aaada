//! Triple-backtick code blocks.
//!
//! Both captures are lazy: `lang` stops at the first newline after the
//! opening fence, `code` at the first closing fence, so one match never
//! swallows a neighbouring block.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::error::ScanError;
pub use crate::text::read_document;

static FENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(?P<lang>[^\n]*?)\n(?P<code>.*?)```").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FencedBlock {
    /// Text after the opening fence on the same line; empty when untagged.
    pub lang: String,
    /// Everything between the opening line and the closing fence.
    pub code: String,
    /// Byte range of the whole match, fences included.
    pub start: usize,
    pub end: usize,
}

impl FencedBlock {
    pub fn lang(&self) -> Option<&str> {
        if self.lang.is_empty() {
            None
        } else {
            Some(&self.lang)
        }
    }
}

/// All fenced blocks in document order, non-overlapping, leftmost first.
pub fn extract_blocks(text: &str) -> Vec<FencedBlock> {
    FENCE_RE
        .captures_iter(text)
        .map(|caps| {
            let whole = caps.get(0).map(|m| (m.start(), m.end())).unwrap_or_default();
            let block = FencedBlock {
                lang: caps.name("lang").map(|m| m.as_str()).unwrap_or("").to_string(),
                code: caps.name("code").map(|m| m.as_str()).unwrap_or("").to_string(),
                start: whole.0,
                end: whole.1,
            };
            debug!(lang = %block.lang, start = block.start, end = block.end, "fenced block");
            block
        })
        .collect()
}

pub fn extract_from_file(path: &Path) -> Result<Vec<FencedBlock>, ScanError> {
    let text = read_document(path)?;
    Ok(extract_blocks(&text))
}
