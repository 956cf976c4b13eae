//! Tag parser for a single C block comment.
//!
//! The comment is normalized into cleaned lines (delimiters, leading `*` and
//! surrounding whitespace removed, blank lines dropped). Each accessor scans
//! those lines independently for its tag keyword, which must be followed by a
//! space: `@brieffoo` is not a `@brief` line.

use crate::model::Param;
use std::collections::HashMap;

const TAG_BRIEF: &str = "@brief ";
const TAG_CATEGORY: &str = "@category ";
const TAG_TSPARAM: &str = "@tsparam ";
const TAG_TSRETURN: &str = "@tsreturn ";
const TAG_PARAM: &str = "@param ";
const TAG_RETURN: &str = "@return ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentBlock {
    lines: Vec<String>,
}

impl CommentBlock {
    pub fn parse(raw: &str) -> Self {
        let mut text = raw.trim();
        if let Some(rest) = text.strip_prefix("/*") {
            text = rest;
        }
        if let Some(rest) = text.strip_suffix("*/") {
            text = rest;
        }

        let lines = text
            .lines()
            .map(|line| {
                let line = line.trim();
                line.strip_prefix('*').unwrap_or(line).trim()
            })
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        Self { lines }
    }

    /// Cleaned, non-empty lines in comment order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn brief(&self) -> Option<&str> {
        self.first_tag(TAG_BRIEF)
    }

    pub fn category(&self) -> Option<&str> {
        self.first_tag(TAG_CATEGORY)
    }

    /// Every `@tsparam <name> <type>` line. Lines without a type are skipped.
    pub fn ts_params(&self) -> Vec<Param> {
        self.all_tags(TAG_TSPARAM)
            .filter_map(split_field)
            .map(|(name, ty)| Param {
                name: name.to_string(),
                ty: ty.to_string(),
                description: None,
            })
            .collect()
    }

    pub fn ts_return(&self) -> Option<&str> {
        self.first_tag(TAG_TSRETURN)
    }

    /// `@param <name> <text>` lines keyed by name; a later line for the same
    /// name replaces an earlier one.
    pub fn param_descriptions(&self) -> HashMap<&str, &str> {
        self.all_tags(TAG_PARAM).filter_map(split_field).collect()
    }

    pub fn return_description(&self) -> Option<&str> {
        self.first_tag(TAG_RETURN)
    }

    fn first_tag(&self, tag: &'static str) -> Option<&str> {
        self.all_tags(tag).next()
    }

    fn all_tags(&self, tag: &'static str) -> impl Iterator<Item = &str> + '_ {
        self.lines()
            .iter()
            .filter_map(move |line| line.strip_prefix(tag))
            .map(str::trim)
    }
}

/// Split "name  rest of text" at the first whitespace run.
fn split_field(text: &str) -> Option<(&str, &str)> {
    let (name, rest) = text.split_once(char::is_whitespace)?;
    Some((name, rest.trim_start()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MALLOC: &str = "/**
 * @brief Allocates memory.
 * @category Memory
 * @tsparam size number
 * @tsreturn number
 * @param size Number of bytes
 * @return Pointer to allocated block
 */";

    #[test]
    fn strips_delimiters_and_markers() {
        let block = CommentBlock::parse("/**\n *\n * first\n   *   second  \n\n */");
        assert_eq!(block.lines(), ["first", "second"]);
    }

    #[test]
    fn only_one_leading_marker_is_removed() {
        let block = CommentBlock::parse("/*\n ** bold\n */");
        assert_eq!(block.lines(), ["* bold"]);
    }

    #[test]
    fn reads_all_tags() {
        let block = CommentBlock::parse(MALLOC);
        assert_eq!(block.brief(), Some("Allocates memory."));
        assert_eq!(block.category(), Some("Memory"));
        assert_eq!(block.ts_return(), Some("number"));
        assert_eq!(block.return_description(), Some("Pointer to allocated block"));
        assert_eq!(
            block.ts_params(),
            vec![Param {
                name: "size".into(),
                ty: "number".into(),
                description: None,
            }]
        );
        assert_eq!(block.param_descriptions().get("size"), Some(&"Number of bytes"));
    }

    #[test]
    fn absent_tags() {
        let block = CommentBlock::parse("/* just prose */");
        assert_eq!(block.brief(), None);
        assert_eq!(block.category(), None);
        assert_eq!(block.ts_return(), None);
        assert_eq!(block.return_description(), None);
        assert!(block.ts_params().is_empty());
        assert!(block.param_descriptions().is_empty());
    }

    #[test]
    fn tag_requires_trailing_space() {
        let block = CommentBlock::parse("/**\n * @brieffoo bar\n * @returns nope\n */");
        assert_eq!(block.brief(), None);
        assert_eq!(block.return_description(), None);
    }

    #[test]
    fn first_match_wins_for_single_tags() {
        let block = CommentBlock::parse("/**\n * @brief one\n * @brief two\n */");
        assert_eq!(block.brief(), Some("one"));
    }

    #[test]
    fn tsparam_without_type_is_skipped() {
        let block = CommentBlock::parse(
            "/**\n * @tsparam ctx JSContextPointer\n * @tsparam lonely\n * @tsparam  value \t JSValuePointer | null\n */",
        );
        let params = block.ts_params();
        assert_eq!(params.len(), 2);
        assert_eq!(params[0].name, "ctx");
        assert_eq!(params[1].name, "value");
        assert_eq!(params[1].ty, "JSValuePointer | null");
    }

    #[test]
    fn later_param_description_wins() {
        let block = CommentBlock::parse("/**\n * @param foo A\n * @param foo B\n */");
        assert_eq!(block.param_descriptions().get("foo"), Some(&"B"));
    }

    #[test]
    fn reparsing_cleaned_lines_is_stable() {
        let block = CommentBlock::parse(MALLOC);
        let again = CommentBlock::parse(&block.lines().join("\n"));
        assert_eq!(again, block);
        assert_eq!(again.brief(), block.brief());
        assert_eq!(again.ts_params(), block.ts_params());
        assert_eq!(again.param_descriptions(), block.param_descriptions());
    }
}
