//! # Error Types
//!
//! This module defines error types used throughout the recibo library.
//!
//! The pure generation paths (variable expansion, layout, command
//! generation, HTML rendering) never fail on malformed data — they degrade
//! to empty output instead. Only the I/O-adjacent surfaces return errors:
//! logo uploads and print dispatch.

use thiserror::Error;

/// Maximum accepted logo upload size: 5 MB.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Errors from the single-shot logo upload operation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UploadError {
    /// File exceeds the upload size cap.
    #[error("file is {size} bytes, exceeds the {MAX_UPLOAD_BYTES} byte limit")]
    TooLarge { size: usize },

    /// Mimetype is not `image/*`.
    #[error("unsupported file type: {0}")]
    NotAnImage(String),

    /// The host failed to read the file.
    #[error("file read failed: {0}")]
    ReadFailed(String),

    /// A previous upload has been started and not yet completed or
    /// cancelled.
    #[error("another upload is already in progress")]
    UploadInProgress,

    /// `complete_logo_upload` was called without a matching begin.
    #[error("no upload in progress")]
    NoUploadPending,

    /// The target component no longer exists in the template.
    #[error("no component with id '{0}'")]
    UnknownComponent(String),
}

/// Errors from print dispatch (browser print / raw command transmission).
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The host could not provide a page to print into (popup blocked,
    /// no windowing context).
    #[error("print page unavailable: {0}")]
    PageUnavailable(String),

    /// The host could not provide a byte sink (no serial support, port
    /// open failure).
    #[error("transport unavailable: {0}")]
    TransportUnavailable(String),

    /// I/O error while writing the command buffer.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
