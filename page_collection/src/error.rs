//! Page collection error types

use thiserror::Error;
use view_types::ViewError;

/// Page collection error types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PageError {
    #[error("Index {index} out of range for {len} pages")]
    OutOfRange { index: usize, len: usize },

    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },

    #[error("View root rejected placement: {0}")]
    View(#[from] ViewError),
}
