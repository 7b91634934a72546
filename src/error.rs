//! Error types of this crate

use thiserror::Error;

use crate::item::ItemId;

/// The two broad families of board errors.
///
/// Both are handled the same way by the [`reduce`](crate::action::reduce) function and by a [`TaskBoard`](crate::TaskBoard):
/// the request is dropped and the board is left untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request refers to a bucket, an index or an item that does not exist
    NotFound,
    /// The request carries unusable data (e.g. blank text)
    InvalidInput,
}

/// Errors that can happen when building or mutating a [`Board`](crate::Board)
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("no bucket named {0:?}")]
    UnknownBucket(String),
    #[error("no item at index {index} in bucket {bucket:?}")]
    IndexOutOfBounds { bucket: String, index: usize },
    #[error("no item with id {0}")]
    UnknownItem(ItemId),

    #[error("item text must not be blank")]
    BlankText,
    #[error("bucket names must not be blank")]
    BlankBucketName,
    #[error("bucket {0:?} is defined more than once")]
    DuplicateBucket(String),
    #[error("item {0} is present more than once")]
    DuplicateItem(ItemId),
    #[error("a layout needs at least one bucket")]
    EmptyLayout,
}

impl BoardError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BoardError::UnknownBucket(_)
            | BoardError::IndexOutOfBounds { .. }
            | BoardError::UnknownItem(_) => ErrorKind::NotFound,

            BoardError::BlankText
            | BoardError::BlankBucketName
            | BoardError::DuplicateBucket(_)
            | BoardError::DuplicateItem(_)
            | BoardError::EmptyLayout => ErrorKind::InvalidInput,
        }
    }
}

/// Errors that can happen when reading or writing a persisted board
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("unable to access {path:?}: {source}")]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid board data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("a board with {0} buckets cannot be saved as a flat list")]
    NotSingleBucket(usize),
    #[error("this file holds the flat list of bucket {expected:?}, not of bucket {found:?}")]
    FlatBucketMismatch { expected: String, found: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_kinds() {
        assert_eq!(BoardError::UnknownBucket("x".into()).kind(), ErrorKind::NotFound);
        assert_eq!(BoardError::IndexOutOfBounds{ bucket: "todo".into(), index: 3 }.kind(), ErrorKind::NotFound);
        assert_eq!(BoardError::UnknownItem(ItemId::from("a")).kind(), ErrorKind::NotFound);
        assert_eq!(BoardError::BlankText.kind(), ErrorKind::InvalidInput);
        assert_eq!(BoardError::DuplicateItem(ItemId::from("a")).kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn error_messages() {
        let err = BoardError::IndexOutOfBounds{ bucket: "todo".into(), index: 3 };
        assert_eq!(err.to_string(), "no item at index 3 in bucket \"todo\"");
        assert_eq!(BoardError::UnknownItem(ItemId::from("t1")).to_string(), "no item with id t1");
    }
}
