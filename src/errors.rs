use std::{io, path::PathBuf};

/// Error type shared by every stage of a toss/recover run.
///
/// All variants are terminal: the driver prints a one-line diagnostic and
/// exits with status 1 without attempting any remaining queued entries.
#[derive(thiserror::Error, Debug)]
pub enum TossError {
    /// Bad or missing command-line input.
    #[error("{0}")]
    Usage(String),

    /// An operand already lies under the recycle bin root.
    #[error("do not include recycle directory: \"{}\" in the filename", .0.display())]
    PathConflict(PathBuf),

    /// Toss source does not exist.
    #[error("failed to toss - file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Recover source does not exist inside the bin.
    #[error("failed to recover - file not found in recycle bin: {}", .0.display())]
    NotFoundInBin(PathBuf),

    /// A directory operand was given without the recursive flag.
    #[error("{} is a directory. Use --recursive flag to include directories", .0.display())]
    DirectoryNeedsRecursive(PathBuf),

    /// The user answered no to an overwrite confirmation.
    #[error("toss operation canceled")]
    OverwriteDeclined(PathBuf),

    /// File system I/O failure.
    #[error("I/O error while accessing {0}")]
    Io(PathBuf, #[source] io::Error),
}

impl TossError {
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }

    pub fn io(path: impl Into<PathBuf>, error: io::Error) -> Self {
        Self::Io(path.into(), error)
    }

    /// True for errors surfaced from the underlying filesystem primitive.
    /// The driver reports these with a different prefix than domain errors.
    pub fn is_filesystem(&self) -> bool {
        matches!(self, Self::Io(..))
    }
}

/// Shared result alias for the crate.
pub type Result<T> = std::result::Result<T, TossError>;
