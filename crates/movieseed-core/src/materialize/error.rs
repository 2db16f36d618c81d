//! Error types for seeding and verifying a movie tree.

use crate::naming::NamingError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MaterializeError {
    /// The placeholder video is absent; nothing was touched.
    #[error("source video {} not found", .path.display())]
    SourceMissing { path: PathBuf },

    /// A catalog title has no usable folder name; nothing was touched.
    #[error("entry {index} ({title:?}): {source}")]
    UnusableName {
        index: usize,
        title: String,
        #[source]
        source: NamingError,
    },

    #[error("{op} {}: {source}", .path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl MaterializeError {
    pub(crate) fn io(op: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        MaterializeError::Io {
            op,
            path: path.into(),
            source,
        }
    }
}
