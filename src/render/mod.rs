//! Rendering helpers shared by output formats.

pub mod typescript;

use crate::model::{FunctionRecord, RunMetadata, MEMORY_CATEGORY};
use std::collections::BTreeMap;

/// Timestamp format of the "Generated on" line.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Leading comment block describing when and from what the file was generated.
pub fn metadata_header(meta: &RunMetadata) -> Vec<String> {
    let mut lines = vec![
        "/**".to_string(),
        format!(" * Generated on: {}", meta.generated_at.format(TIMESTAMP_FORMAT)),
    ];

    if let Some(ref source) = meta.source_file {
        lines.push(format!(" * Source file: {}", source));
    }

    let git = &meta.git;
    if let Some(ref commit) = git.commit {
        lines.push(format!(" * Git commit: {}", commit));
        if let Some(ref branch) = git.branch {
            lines.push(format!(" * Git branch: {}", branch));
        }
        if let Some(ref author) = git.author {
            lines.push(format!(" * Git author: {}", author));
        }
        if let Some(ref remote) = git.remote {
            lines.push(format!(" * Git remote: {}", remote));
        }
    }

    lines.push(" */".to_string());
    lines.push(String::new());
    lines
}

/// Group records by category: Memory first, the rest ascending, and the
/// functions of each group sorted by name.
pub fn group_by_category(records: &[FunctionRecord]) -> Vec<(&str, Vec<&FunctionRecord>)> {
    let mut groups: BTreeMap<&str, Vec<&FunctionRecord>> = BTreeMap::new();
    for record in records {
        groups.entry(record.category()).or_default().push(record);
    }

    let memory = groups.remove_entry(MEMORY_CATEGORY);
    memory
        .into_iter()
        .chain(groups)
        .map(|(category, mut funcs)| {
            funcs.sort_by(|a, b| a.name.cmp(&b.name));
            (category, funcs)
        })
        .collect()
}
