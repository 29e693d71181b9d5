//! Last-modified annotation for posts.
//!
//! A post that has been revised since its creating commit gets a
//! `last_modified_at` metadata entry carrying the date of the most recent
//! revision. A post with at most one revision, or whose history cannot be
//! read at all, is left untouched. Nothing here ever fails the build.

use crate::git;
use crate::hooks::{HookEvent, HookRegistry};
use crate::post::Post;

/// Metadata key consumed by the templating layer.
pub const LAST_MODIFIED_KEY: &str = "last_modified_at";

/// Stamp `last_modified_at` on a post with more than one recorded revision.
pub fn annotate(post: &mut Post) {
    let count = git::revision_count(post.path());
    if count <= 1 {
        tracing::debug!(path = %post.path().display(), count, "skipping, no revisions past creation");
        return;
    }

    if let Some(date) = git::latest_revision_date(post.path()) {
        tracing::debug!(path = %post.path().display(), %date, "stamped");
        post.set_metadata(LAST_MODIFIED_KEY, date);
    }
}

/// Register the annotator on the post-init lifecycle event.
pub fn install(registry: &mut HookRegistry) {
    registry.register(HookEvent::PostInit, annotate);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotate_outside_repo_leaves_key_absent() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.md");
        std::fs::write(&file, "hello").unwrap();

        let mut post = Post::new(&file);
        annotate(&mut post);

        assert!(post.metadata_str(LAST_MODIFIED_KEY).is_none());
    }

    #[test]
    fn test_install_registers_on_post_init() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.md");
        std::fs::write(&file, "hello").unwrap();

        let mut registry = HookRegistry::new();
        install(&mut registry);

        // No history, so dispatch must be a clean no-op.
        let mut post = Post::new(&file);
        registry.dispatch(HookEvent::PostInit, &mut post);

        assert!(post.metadata.is_empty());
    }
}
