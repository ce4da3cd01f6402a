use thiserror::Error;

/// Errors produced while decoding an IDX dataset pair or organizing it into
/// batches. Every failure here is deterministic given the same input bytes:
/// none of these conditions is retryable, so each variant carries the context
/// (byte offset, expected vs. actual sizes) needed to diagnose a malformed
/// dataset in one pass.
#[derive(Debug, Error)]
pub enum DataError {
    /// The stream ended before a declared read could complete.
    #[error("truncated stream at byte offset {offset}: needed {needed} bytes, got {got}")]
    TruncatedStream {
        offset: usize,
        needed: usize,
        got: usize,
    },

    /// A header field disagrees with what the caller asked for.
    #[error("header mismatch for {field}: expected {expected}, file declares {actual}")]
    HeaderMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A label byte does not fit in the configured class count.
    #[error("label {label} at item {index} is out of range for {num_classes} classes")]
    LabelOutOfRange {
        index: usize,
        label: u8,
        num_classes: usize,
    },

    /// Examples fed to the batch organizer do not share a single vector size.
    #[error("inconsistent vector size at example {index}: expected {expected}, got {actual}")]
    InconsistentVectorSize {
        index: usize,
        expected: usize,
        actual: usize,
    },

    /// Decoded data does not fit the network topology it is being checked
    /// against. Raised before any numeric work starts.
    #[error("shape mismatch: {what} is {actual}, but the network expects {expected}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("invalid batch count: {0} (must be at least 1)")]
    InvalidBatchCount(usize),

    #[error("invalid layer sizes: {0}")]
    InvalidLayerSpec(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
