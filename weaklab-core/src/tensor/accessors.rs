// src/tensor/accessors.rs
use crate::{buffer::Buffer, error::WeakLabError, tensor::Tensor, types::DType};

impl Tensor {
    /// Returns a clone of the tensor's shape (dimensions).
    pub fn shape(&self) -> Vec<usize> {
        self.read_data().shape.clone()
    }

    /// Returns the data type (`DType`) of the tensor elements.
    pub fn dtype(&self) -> DType {
        self.read_data().dtype
    }

    /// Returns the rank (number of dimensions) of the tensor.
    pub fn rank(&self) -> usize {
        self.read_data().shape.len()
    }

    /// Returns the total number of elements in the tensor.
    pub fn numel(&self) -> usize {
        self.read_data().numel()
    }

    /// Returns true for rank-0 tensors.
    pub fn is_scalar(&self) -> bool {
        self.rank() == 0
    }

    /// Size of the first dimension, or `None` for a scalar.
    pub fn len_first_dim(&self) -> Option<usize> {
        self.read_data().shape.first().copied()
    }

    /// Returns a copy of the data as `Vec<f32>`.
    ///
    /// # Errors
    /// `WeakLabError::DataTypeMismatch` if the tensor is not F32.
    pub fn get_f32_data(&self) -> Result<Vec<f32>, WeakLabError> {
        Ok(self.read_data().buffer.try_get_f32()?.to_vec())
    }

    /// Returns a copy of the data as `Vec<f64>`.
    ///
    /// # Errors
    /// `WeakLabError::DataTypeMismatch` if the tensor is not F64.
    pub fn get_f64_data(&self) -> Result<Vec<f64>, WeakLabError> {
        Ok(self.read_data().buffer.try_get_f64()?.to_vec())
    }

    /// Returns a copy of the data as `Vec<i64>`.
    ///
    /// # Errors
    /// `WeakLabError::DataTypeMismatch` if the tensor is not I64.
    pub fn get_i64_data(&self) -> Result<Vec<i64>, WeakLabError> {
        Ok(self.read_data().buffer.try_get_i64()?.to_vec())
    }

    /// Returns the data converted to f64, whatever the dtype.
    pub fn to_f64_vec(&self) -> Vec<f64> {
        match &self.read_data().buffer {
            Buffer::F32(values) => values.iter().map(|&v| f64::from(v)).collect(),
            Buffer::F64(values) => values.to_vec(),
            Buffer::I64(values) => values.iter().map(|&v| v as f64).collect(),
        }
    }
}
