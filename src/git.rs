//! Narrow interface to the git binary.
//!
//! Two read-only queries against the history of a single file. Both shell
//! out to `git` with the path as one discrete argv entry, so filenames with
//! spaces, semicolons or other metacharacters are never reinterpreted.
//! Every failure mode (git missing, file untracked, not a repository)
//! degrades to "no history" rather than an error.

use std::path::Path;
use std::process::Command;

use chrono::DateTime;

/// Format produced by `git log --date=iso`, e.g. `2022-01-01 10:00:00 +0000`.
const GIT_ISO_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// Count revisions reachable from HEAD that touched `path`.
///
/// Returns 0 when the count cannot be determined for any reason.
pub fn revision_count(path: &Path) -> u64 {
    let (dir, spec) = repo_query(path);
    let output = match Command::new("git")
        .args(["rev-list", "--count", "HEAD", "--"])
        .arg(spec)
        .current_dir(dir)
        .output()
    {
        Ok(output) => output,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "git rev-list failed to spawn");
            return 0;
        }
    };

    // Non-numeric output (including git's own error text) counts as zero.
    String::from_utf8_lossy(&output.stdout)
        .trim()
        .parse()
        .unwrap_or(0)
}

/// Fetch the author date of the most recent revision touching `path`,
/// as the iso string git prints.
///
/// Returns None when there is no usable history or the output is not a
/// timestamp.
pub fn latest_revision_date(path: &Path) -> Option<String> {
    let (dir, spec) = repo_query(path);
    let output = Command::new("git")
        .args(["log", "-1", "--pretty=%ad", "--date=iso", "--"])
        .arg(spec)
        .current_dir(dir)
        .output()
        .ok()?;

    let date = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if is_iso_date(&date) {
        Some(date)
    } else {
        tracing::debug!(path = %path.display(), output = %date, "unusable git log output");
        None
    }
}

/// Directory to run git from and the pathspec to hand it: the file's parent
/// and the bare filename. The pathspec must be relative to the directory git
/// runs in, so relative and absolute post paths resolve to the same file.
fn repo_query(path: &Path) -> (&Path, &Path) {
    match (path.parent(), path.file_name()) {
        (Some(dir), Some(name)) if !dir.as_os_str().is_empty() => (dir, Path::new(name)),
        _ => (Path::new("."), path),
    }
}

fn is_iso_date(s: &str) -> bool {
    DateTime::parse_from_str(s, GIT_ISO_FORMAT).is_ok()
}
