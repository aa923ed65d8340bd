//! Errors

use thiserror::Error;

/// Error type for reading SU2 meshes
#[derive(Debug, Error)]
pub enum Error {
    /// A mandatory section keyword is absent from the file
    #[error("missing section: {0}")]
    MissingSection(String),

    /// A record could not be interpreted
    ///
    /// `line` is the 1-based line number in the original file, or the first line after the end
    /// of the file if a record was expected there.
    #[error("malformed record at line {line}: {message}")]
    MalformedRecord {
        /// Line number in the file
        line: usize,
        /// Description of the problem
        message: String,
    },

    /// A boundary element uses a point that is not in the file
    #[error("boundary element uses node {node}, but there are only {point_count} points")]
    NodeOutOfRange {
        /// The node index
        node: usize,
        /// Number of points in the file
        point_count: usize,
    },

    /// The file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Reader options could not be parsed
    #[error("invalid reader options: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn malformed(line: usize, message: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line,
            message: message.into(),
        }
    }
}

/// Result type for reading SU2 meshes
pub type Result<T> = std::result::Result<T, Error>;
