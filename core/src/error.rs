//! Error types for item operations.
//!
//! # Design
//! Every failure belongs to one of two kinds: the referenced item does not
//! exist (`NotFound`) or the client sent something unusable (`BadRequest`).
//! The `Display` text of each variant is the exact message clients see.

use thiserror::Error;

/// Broad classification of an `ItemError`, one per HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    BadRequest,
}

impl ErrorKind {
    pub fn status(self) -> u16 {
        match self {
            ErrorKind::NotFound => 404,
            ErrorKind::BadRequest => 400,
        }
    }
}

/// Errors returned by the operations in [`crate::ops`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ItemError {
    /// No item in the store carries this name.
    #[error("No such item: {0}")]
    NotFound(String),

    /// An item with this name is already on the list.
    #[error("{0} already exists in your cart!")]
    AlreadyExists(String),

    /// `name` or `price` was absent or empty on create.
    #[error("Missing required data. Please input a name and price.")]
    MissingData,
}

impl ItemError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ItemError::NotFound(_) => ErrorKind::NotFound,
            ItemError::AlreadyExists(_) | ItemError::MissingData => ErrorKind::BadRequest,
        }
    }

    pub fn status(&self) -> u16 {
        self.kind().status()
    }
}
