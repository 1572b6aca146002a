//! Error types for label generation.

use std::io;
use thiserror::Error;

/// Result type alias for label operations.
pub type Result<T> = std::result::Result<T, LabelError>;

/// Errors that can occur while collecting rows or producing a label PDF.
#[derive(Error, Debug)]
pub enum LabelError {
    /// No row had a non-blank barcode, so there is nothing to print.
    #[error("Please enter at least one item number.")]
    NoValidRows,

    /// The barcode value cannot be encoded as Code128.
    #[error("Cannot encode '{value}' as Code128: {reason}")]
    Barcode { value: String, reason: String },

    /// I/O error when reading rows or writing the PDF.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
