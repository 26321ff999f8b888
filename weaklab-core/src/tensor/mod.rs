// src/tensor/mod.rs

use std::fmt;
use std::sync::Arc;

use crate::buffer::Buffer;
use crate::error::WeakLabError;
use crate::tensor_data::TensorData;

mod accessors;
mod view_methods;

pub mod utils;

/// Represents an immutable, multi-dimensional array (tensor) on the CPU.
///
/// `Tensor` wraps its `TensorData` in an `Arc`, so clones are cheap and share
/// the same element buffer. Every operation returns a new tensor; nothing is
/// mutated in place, which keeps tensors `Send + Sync` without locking.
#[derive(Clone)]
pub struct Tensor {
    pub(crate) data: Arc<TensorData>,
}

impl Tensor {
    /// Creates a new F32 Tensor with the given data and shape.
    ///
    /// # Errors
    /// Returns `WeakLabError::TensorCreationError` if `data_vec.len()` does not
    /// match the product of `shape`.
    pub fn new(data_vec: Vec<f32>, shape: Vec<usize>) -> Result<Self, WeakLabError> {
        Self::from_buffer(Buffer::F32(Arc::new(data_vec)), shape)
    }

    /// Creates a new F64 Tensor with the given data and shape.
    pub fn new_f64(data_vec: Vec<f64>, shape: Vec<usize>) -> Result<Self, WeakLabError> {
        Self::from_buffer(Buffer::F64(Arc::new(data_vec)), shape)
    }

    /// Creates a new I64 Tensor with the given data and shape.
    pub fn new_i64(data_vec: Vec<i64>, shape: Vec<usize>) -> Result<Self, WeakLabError> {
        Self::from_buffer(Buffer::I64(Arc::new(data_vec)), shape)
    }

    /// Creates a rank-0 F32 tensor holding `value`.
    pub fn scalar(value: f32) -> Self {
        Self::from_valid_buffer(Buffer::F32(Arc::new(vec![value])), Vec::new())
    }

    /// Creates a rank-0 I64 tensor holding `value`.
    pub fn scalar_i64(value: i64) -> Self {
        Self::from_valid_buffer(Buffer::I64(Arc::new(vec![value])), Vec::new())
    }

    pub(crate) fn from_buffer(buffer: Buffer, shape: Vec<usize>) -> Result<Self, WeakLabError> {
        let tensor_data = TensorData::new(buffer, shape)?;
        Ok(Tensor {
            data: Arc::new(tensor_data),
        })
    }

    /// Builds a tensor whose buffer length is known to match `shape`.
    pub(crate) fn from_valid_buffer(buffer: Buffer, shape: Vec<usize>) -> Self {
        let strides = utils::calculate_strides(&shape);
        Tensor {
            data: Arc::new(TensorData {
                dtype: buffer.dtype(),
                buffer,
                shape,
                strides,
            }),
        }
    }

    /// Read access to the internal `TensorData`.
    pub(crate) fn read_data(&self) -> &TensorData {
        &self.data
    }
}

impl PartialEq for Tensor {
    /// Two tensors are equal when they have the same shape, dtype and elements.
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
            || (self.data.shape == other.data.shape && self.data.buffer == other.data.buffer)
    }
}

impl fmt::Debug for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.read_data();
        let mut debug = f.debug_struct("Tensor");
        debug.field("shape", &data.shape).field("dtype", &data.dtype);
        match &data.buffer {
            Buffer::F32(values) => debug.field("data", &values.as_slice()),
            Buffer::F64(values) => debug.field("data", &values.as_slice()),
            Buffer::I64(values) => debug.field("data", &values.as_slice()),
        };
        debug.finish()
    }
}
