use std::io;

/// Errors that can occur during file slot operations.
#[derive(Debug, thiserror::Error)]
pub enum FileSlotError {
    /// An I/O error occurred while reading or writing the document file.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
