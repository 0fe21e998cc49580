use std::str::Utf8Error;

/// An error restoring persisted scanner state.
///
/// Any of these means the host and the scanner disagree about the serialized format. It is never
/// caused by the text being scanned.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("serialized word has length {expected}, but {actual} bytes follow the length byte")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("serialized word is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] Utf8Error),
}
