#![forbid(unsafe_code)]

//! Error model for the style layer.
//!
//! Two domains, two enums. Both are recoverable by contract: the variable
//! publication path passes unparseable colors through unchanged, and the
//! theme service keeps its in-memory state authoritative when the backing
//! store fails. Callers that want the typed result use the `Result` APIs
//! directly.

use std::fmt;

/// A color string could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Input is not a 3- or 6-digit hex color (leading `#` optional).
    InvalidFormat(String),
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(input) => write!(f, "invalid color format: {input:?}"),
        }
    }
}

impl std::error::Error for ColorError {}

/// The persisted-preference store failed.
#[derive(Debug)]
pub enum StorageError {
    /// Backing store cannot be reached (quota, permissions, missing backend).
    Unavailable(String),
    /// I/O failure from a file-backed store.
    Io(std::io::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable(reason) => write!(f, "storage unavailable: {reason}"),
            Self::Io(err) => write!(f, "storage I/O: {err}"),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Unavailable(_) => None,
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
