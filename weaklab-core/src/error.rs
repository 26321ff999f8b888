use crate::types::DType;
use thiserror::Error;

/// Custom error type for the weaklab crates.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum WeakLabError {
    #[error("Shape mismatch: expected {expected}, got {actual} during operation {operation}")]
    ShapeMismatch {
        expected: String,
        actual: String,
        operation: String,
    },

    #[error("Rank mismatch: expected {expected}, got {actual}")]
    RankMismatch { expected: usize, actual: usize },

    #[error("Index out of bounds: index {index:?} for shape {shape:?}")]
    IndexOutOfBounds {
        index: Vec<usize>,
        shape: Vec<usize>,
    },

    #[error("Tensor creation error: data length {data_len} does not match shape {shape:?}")]
    TensorCreationError { data_len: usize, shape: Vec<usize> },

    #[error("Data type mismatch for operation '{operation}': expected {expected:?}, got {actual:?}")]
    DataTypeMismatch {
        expected: DType,
        actual: DType,
        operation: String,
    },

    #[error("Cannot stack an empty list of tensors")]
    EmptyTensorList,

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("Invalid sparse matrix: {0}")]
    InvalidSparseMatrix(String),

    /// Rejected split specification (bad counts, bad fractions, mixed kinds).
    #[error("{message}")]
    InvalidSplit { message: String },

    #[error(
        "split_data() currently only accepts inputs of type sequence, dense array, \
         sparse matrix, or tensor with at least one dimension; not {kind}"
    )]
    UnsupportedCollection { kind: String },

    #[error("Label {name} should be a tensor, not {found}.")]
    InvalidLabel { name: String, found: String },

    #[error("Length mismatch for {context}: expected {expected}, got {actual}")]
    LengthMismatch {
        expected: usize,
        actual: usize,
        context: String,
    },
}

impl WeakLabError {
    /// Shorthand for [`WeakLabError::InvalidSplit`].
    pub fn invalid_split(message: impl Into<String>) -> Self {
        WeakLabError::InvalidSplit {
            message: message.into(),
        }
    }
}
