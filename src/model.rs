//! Data model for extracted exports — format-agnostic.

use chrono::NaiveDateTime;

/// Category used when a comment carries no `@category` tag.
pub const DEFAULT_CATEGORY: &str = "Other";

/// Return type used when a comment carries no `@tsreturn` tag.
pub const DEFAULT_RETURN_TYPE: &str = "void";

/// Category whose header is part of the interface prologue.
pub const MEMORY_CATEGORY: &str = "Memory";

/// A typed parameter from a `@tsparam` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    /// TypeScript type expression, kept verbatim
    pub ty: String,
    /// Text of the matching `@param` line, if any
    pub description: Option<String>,
}

/// A documented function matched in the header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FunctionRecord {
    pub name: String,
    /// @brief
    pub brief: Option<String>,
    /// @category
    pub category: Option<String>,
    /// @tsparam entries in tag order
    pub params: Vec<Param>,
    /// @tsreturn
    pub return_type: Option<String>,
    /// @return
    pub return_description: Option<String>,
}

impl FunctionRecord {
    pub fn category(&self) -> &str {
        self.category.as_deref().unwrap_or(DEFAULT_CATEGORY)
    }

    pub fn return_type(&self) -> &str {
        self.return_type.as_deref().unwrap_or(DEFAULT_RETURN_TYPE)
    }
}

/// Version-control facts about the working directory. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitInfo {
    pub commit: Option<String>,
    pub branch: Option<String>,
    /// "Name <email>" of the last commit
    pub author: Option<String>,
    /// URL of the `origin` remote
    pub remote: Option<String>,
}

/// Facts about a single generation run, rendered into the output header.
#[derive(Debug, Clone)]
pub struct RunMetadata {
    pub generated_at: NaiveDateTime,
    /// Base name of the input file; `None` when reading stdin
    pub source_file: Option<String>,
    pub git: GitInfo,
}
