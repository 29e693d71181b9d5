//! Post entity as seen by the build pipeline.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// A content document discovered by the site build.
///
/// The build framework owns the lifecycle; lifecycle hooks only mutate
/// `metadata`, which the templating layer reads when rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Filesystem path to the post's source file.
    pub path: PathBuf,

    /// Front-matter-style metadata, string keys to arbitrary JSON values.
    #[serde(default)]
    pub metadata: BTreeMap<String, serde_json::Value>,
}

impl Post {
    /// Create a post with empty metadata.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            metadata: BTreeMap::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Set a metadata value, replacing any existing entry for the key.
    pub fn set_metadata(&mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) {
        self.metadata.insert(key.into(), value.into());
    }

    /// Get a metadata value as a string, if present and string-valued.
    pub fn metadata_str(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).and_then(|v| v.as_str())
    }
}
