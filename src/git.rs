//! Repository state via the `git` CLI.

use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::types::GitInfo;

/// Run `git <args>` in `dir`, returning trimmed stdout on success.
fn git(dir: &Path, args: &[&str]) -> Option<String> {
    let output = match Command::new("git").args(args).current_dir(dir).output() {
        Ok(o) => o,
        Err(e) => {
            debug!(error = %e, "git not runnable");
            return None;
        }
    };
    if !output.status.success() {
        return None;
    }
    Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Branch and dirty flag for the repository containing `dir`.
///
/// None outside a repository. A detached HEAD reports its short hash.
pub fn git_info(dir: &Path) -> Option<GitInfo> {
    git(dir, &["rev-parse", "--git-dir"])?;

    let branch = match git(dir, &["branch", "--show-current"]) {
        Some(b) if !b.is_empty() => b,
        _ => git(dir, &["rev-parse", "--short", "HEAD"]).filter(|h| !h.is_empty())?,
    };

    // A failing status still leaves a usable branch name.
    let has_changes = git(dir, &["status", "--porcelain"]).is_some_and(|s| !s.is_empty());

    Some(GitInfo { branch, has_changes })
}

// ============================================================================
// TESTS
// ============================================================================
