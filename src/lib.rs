//! lastmod library.
//!
//! Stamps static-site posts with a `last_modified_at` date pulled from git
//! history, via a post-init lifecycle hook.

pub mod annotator;
pub mod error;
pub mod git;
pub mod hooks;
pub mod post;

pub use annotator::{annotate, install, LAST_MODIFIED_KEY};
pub use error::Error;
pub use hooks::{HookEvent, HookRegistry};
pub use post::Post;
