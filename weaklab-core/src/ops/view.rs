// src/ops/view.rs
use crate::buffer::Buffer;
use crate::error::WeakLabError;
use crate::tensor::Tensor;

/// Extracts row `index` of the first dimension, dropping that dimension.
///
/// # Errors
/// - `RankMismatch` for a scalar input.
/// - `IndexOutOfBounds` if `index >= shape[0]`.
pub fn row_op(tensor: &Tensor, index: usize) -> Result<Tensor, WeakLabError> {
    let data = tensor.read_data();
    let rows = match data.shape.first() {
        Some(&rows) => rows,
        None => {
            return Err(WeakLabError::RankMismatch {
                expected: 1,
                actual: 0,
            })
        }
    };
    if index >= rows {
        return Err(WeakLabError::IndexOutOfBounds {
            index: vec![index],
            shape: data.shape.clone(),
        });
    }
    let row_numel = data.row_numel();
    let start = index * row_numel;
    let buffer = Buffer::gather(&[&data.buffer], &[(0, start..start + row_numel)])?;
    Ok(Tensor::from_valid_buffer(buffer, data.shape[1..].to_vec()))
}

/// Reinterprets the tensor as rank 1. Shares the element buffer.
pub fn flatten_op(tensor: &Tensor) -> Tensor {
    let data = tensor.read_data();
    Tensor::from_valid_buffer(data.buffer.clone(), vec![data.numel()])
}

#[cfg(test)]
#[path = "view_test.rs"]
mod tests;
