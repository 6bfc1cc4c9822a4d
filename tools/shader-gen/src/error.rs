//! Error types for shader generation

use std::io;
use std::path::PathBuf;

/// Failure while generating a shader source fragment
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// Input shader path is not an existing regular file
    #[error("file {} does not exist", .0.display())]
    MissingInput(PathBuf),

    /// Template path is not an existing regular file
    #[error("template {} does not exist", .0.display())]
    MissingTemplate(PathBuf),

    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
