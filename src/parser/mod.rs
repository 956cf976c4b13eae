//! Header scanner — pairs block comments with the exported declarations they
//! document.
//!
//! Scanning happens in two phases:
//!
//! 1. locate the next `/* ... */` span;
//! 2. look ahead from the end of that span for the first `<PREFIX>Name(...)`
//!    call shape, across any intervening text including other comments.
//!
//! A span pairs only when the whitespace after it contains a newline. Comments
//! that start before the end of a matched declaration are consumed by it.

pub mod comment;

use crate::model::FunctionRecord;
use anyhow::{Context, Result};
use comment::CommentBlock;
use regex::Regex;

const COMMENT_OPEN: &str = "/*";
const COMMENT_CLOSE: &str = "*/";

/// Default naming prefix of exported functions.
pub const DEFAULT_PREFIX: &str = "HAKO_";

pub struct Extractor {
    declaration: Regex,
}

impl Extractor {
    pub fn new(prefix: &str) -> Result<Self> {
        let pattern = format!(r"\b({}[A-Za-z0-9_]+)\b\s*\([^)]*\)", regex::escape(prefix));
        let declaration = Regex::new(&pattern)
            .with_context(|| format!("invalid function prefix: {}", prefix))?;
        Ok(Self { declaration })
    }

    /// Extract every documented function, in source order.
    pub fn extract(&self, header: &str) -> Vec<FunctionRecord> {
        let mut records = Vec::new();
        let mut cursor = 0;

        while let Some((start, end)) = find_comment(header, cursor) {
            match self.declaration_after(header, end) {
                Some((name, decl_end)) => {
                    records.push(build_record(&header[start..end], name));
                    cursor = decl_end;
                }
                None => {
                    tracing::trace!(offset = start, "comment has no adjacent declaration");
                    cursor = end;
                }
            }
        }

        tracing::debug!(count = records.len(), "extracted documented functions");
        records
    }

    /// Find the declaration documented by a comment ending at `comment_end`.
    /// Returns the function name and the offset just past its `)`.
    fn declaration_after<'h>(
        &self,
        header: &'h str,
        comment_end: usize,
    ) -> Option<(&'h str, usize)> {
        let after = &header[comment_end..];
        let gap = &after[..after.len() - after.trim_start().len()];
        if !gap.contains('\n') {
            return None;
        }

        let caps = self.declaration.captures_at(header, comment_end)?;
        let name = caps.get(1)?;
        let whole = caps.get(0)?;
        Some((name.as_str(), whole.end()))
    }
}

/// Locate the next complete block comment at or after `from`.
fn find_comment(text: &str, from: usize) -> Option<(usize, usize)> {
    let start = from + text[from..].find(COMMENT_OPEN)?;
    let body = start + COMMENT_OPEN.len();
    let close = body + text[body..].find(COMMENT_CLOSE)?;
    Some((start, close + COMMENT_CLOSE.len()))
}

fn build_record(comment: &str, name: &str) -> FunctionRecord {
    let block = CommentBlock::parse(comment);
    let descriptions = block.param_descriptions();

    let params = block
        .ts_params()
        .into_iter()
        .map(|mut param| {
            param.description = descriptions.get(param.name.as_str()).map(|d| d.to_string());
            param
        })
        .collect();

    FunctionRecord {
        name: name.to_string(),
        brief: block.brief().map(str::to_string),
        category: block.category().map(str::to_string),
        params,
        return_type: block.ts_return().map(str::to_string),
        return_description: block.return_description().map(str::to_string),
    }
}
