//! Error type shared by every container in the crate.
//!
//! All failures are local and synchronous: an operation either succeeds or
//! returns a [`CollectionError`] to its immediate caller. Nothing is retried.
//! Containers that have a natural non-failing form (`try_add`, `try_pop`,
//! `try_dequeue`) expose it alongside the strict variant.

use thiserror::Error;

/// Errors returned by container operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// A constructor or configuration parameter was rejected.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// What was wrong with the argument.
        message: String,
    },

    /// Positional access outside `[0, len)`.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The index that was requested.
        index: usize,
        /// Length of the container at the time of the access.
        len: usize,
    },

    /// Strict insert of a key that is already present.
    #[error("key already present")]
    DuplicateKey,

    /// Lookup or removal of a key that is not present.
    #[error("key not found")]
    KeyNotFound,

    /// A node handle that was not issued by this sequence, or whose node
    /// has already been removed.
    #[error("node reference does not belong to this sequence")]
    InvalidReference,

    /// Pop, dequeue or peek on an empty stack or queue.
    #[error("collection is empty")]
    EmptyCollection,
}

impl CollectionError {
    /// Creates an [`CollectionError::InvalidArgument`] error.
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Creates an [`CollectionError::IndexOutOfRange`] error.
    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Short, stable name for log lines.
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => "argument",
            Self::IndexOutOfRange { .. } => "bounds",
            Self::DuplicateKey => "duplicate_key",
            Self::KeyNotFound => "key_not_found",
            Self::InvalidReference => "reference",
            Self::EmptyCollection => "empty",
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CollectionError>;

/// Fails with [`CollectionError::IndexOutOfRange`] unless `index < len`.
#[inline]
pub fn check_index(index: usize, len: usize) -> Result<()> {
    if index >= len {
        Err(CollectionError::out_of_range(index, len))
    } else {
        Ok(())
    }
}
