//! Best-effort git metadata for the generated header.

use crate::model::GitInfo;
use std::env;
use std::path::Path;
use std::process::{Command, Stdio};

impl GitInfo {
    /// Query git in `dir`. Nothing here fails the run: a missing binary, a
    /// directory outside any repository or an absent `origin` remote each
    /// leave the affected fields empty.
    pub fn collect(dir: &Path) -> Self {
        let Some(commit) = git(dir, &["rev-parse", "HEAD"]) else {
            return Self::default();
        };

        Self {
            commit: Some(commit),
            branch: git(dir, &["rev-parse", "--abbrev-ref", "HEAD"]),
            author: git(dir, &["log", "-1", "--pretty=format:%an <%ae>"]),
            remote: git(dir, &["remote", "get-url", "origin"]),
        }
    }

    /// Query git in the process working directory. An unusable working
    /// directory leaves every field empty.
    pub fn collect_here() -> Self {
        match env::current_dir() {
            Ok(dir) => Self::collect(&dir),
            Err(e) => {
                tracing::debug!(error = %e, "working directory unavailable, skipping git");
                Self::default()
            }
        }
    }
}

/// Run one git query, returning its trimmed stdout on success.
fn git(dir: &Path, args: &[&str]) -> Option<String> {
    let output = match Command::new("git")
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output()
    {
        Ok(output) => output,
        Err(e) => {
            tracing::debug!(?args, error = %e, "failed to spawn git");
            return None;
        }
    };

    if !output.status.success() {
        tracing::debug!(?args, status = %output.status, "git query failed");
        return None;
    }

    let text = String::from_utf8(output.stdout).ok()?;
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
