// src/tensor_data.rs
use crate::buffer::Buffer;
use crate::error::WeakLabError;
use crate::tensor::utils::calculate_strides;
use crate::types::DType;

/// Internal storage and metadata for a Tensor.
///
/// Data is always contiguous and row-major; `strides` are derived from `shape`
/// and kept so row offsets do not have to be recomputed by every op.
#[derive(Debug, Clone, PartialEq)]
pub struct TensorData {
    /// The underlying typed buffer.
    pub(crate) buffer: Buffer,
    /// The data type of the elements in the buffer.
    pub(crate) dtype: DType,
    /// The shape (dimensions) of the tensor.
    pub(crate) shape: Vec<usize>,
    /// The strides for each dimension.
    pub(crate) strides: Vec<usize>,
}

impl TensorData {
    /// Creates a new `TensorData` from a buffer and a shape.
    ///
    /// # Errors
    /// Returns `WeakLabError::TensorCreationError` if the buffer length does not
    /// match the number of elements described by `shape`.
    pub fn new(buffer: Buffer, shape: Vec<usize>) -> Result<Self, WeakLabError> {
        let numel: usize = shape.iter().product();
        let data_len = buffer.len();
        if data_len != numel {
            return Err(WeakLabError::TensorCreationError { data_len, shape });
        }
        let strides = calculate_strides(&shape);
        Ok(TensorData {
            dtype: buffer.dtype(),
            buffer,
            shape,
            strides,
        })
    }

    /// Number of elements.
    pub fn numel(&self) -> usize {
        self.shape.iter().product()
    }

    /// Number of elements in one row along the first dimension.
    pub(crate) fn row_numel(&self) -> usize {
        self.strides.first().copied().unwrap_or(1)
    }
}
