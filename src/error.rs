//! Error types for the lastmod binary.

use thiserror::Error;

/// Errors surfaced while walking post sources.
///
/// Annotation itself never fails; a post whose history cannot be determined
/// is simply left unstamped.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Not a file or directory: {0}")]
    InvalidPath(String),
}
