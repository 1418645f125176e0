use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while scaffolding a project.
///
/// None of these are recovered from: already-written files stay on disk
/// and the failure surfaces to the user with exit code 1.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("the folder \"{name}\" already exists")]
    AlreadyExists { name: String },

    #[error("failed to write {}: {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("dependency install failed: {reason}")]
    InstallFailed { reason: String },
}
