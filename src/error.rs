use std::path::PathBuf;

use crate::scene::{Rejection, TransformField};

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{object}: malformed record: {source}")]
    Record {
        object: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{object}: host rejected {field}: {reason}")]
    Rejected {
        object: String,
        field: TransformField,
        reason: Rejection,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
