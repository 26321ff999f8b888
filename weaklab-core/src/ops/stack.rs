use crate::buffer::Buffer;
use crate::error::WeakLabError;
use crate::tensor::utils::split_at_dim;
use crate::tensor::Tensor;

/// Stacks a sequence of tensors along a new dimension.
///
/// All input tensors must have the same shape and dtype.
///
/// # Arguments
/// * `tensors` - A slice of tensors to stack.
/// * `dim` - The dimension along which to stack. The new dimension will be inserted here.
///
/// # Errors
/// - `EmptyTensorList` if `tensors` is empty.
/// - `IndexOutOfBounds` if `dim` is greater than the rank of the inputs.
/// - `ShapeMismatch` / `DataTypeMismatch` if the inputs disagree.
pub fn stack_op(tensors: &[Tensor], dim: usize) -> Result<Tensor, WeakLabError> {
    let first = tensors.first().ok_or(WeakLabError::EmptyTensorList)?;
    let first_data = first.read_data();
    let rank = first_data.shape.len();

    if dim > rank {
        return Err(WeakLabError::IndexOutOfBounds {
            index: vec![dim],
            shape: vec![rank + 1],
        });
    }

    for (i, tensor) in tensors.iter().enumerate().skip(1) {
        let data = tensor.read_data();
        if data.shape != first_data.shape {
            return Err(WeakLabError::ShapeMismatch {
                expected: format!("{:?}", first_data.shape),
                actual: format!("{:?} for tensor at index {}", data.shape, i),
                operation: "stack".to_string(),
            });
        }
        if data.dtype != first_data.dtype {
            return Err(WeakLabError::DataTypeMismatch {
                expected: first_data.dtype,
                actual: data.dtype,
                operation: "stack".to_string(),
            });
        }
    }

    // Each input contributes one contiguous block per outer index.
    let (outer, size, inner) = split_at_dim(&first_data.shape, dim);
    let block = size * inner;
    let sources: Vec<&Buffer> = tensors.iter().map(|t| &t.read_data().buffer).collect();
    let mut pieces = Vec::with_capacity(outer * tensors.len());
    for o in 0..outer {
        for t in 0..tensors.len() {
            pieces.push((t, o * block..(o + 1) * block));
        }
    }
    let buffer = Buffer::gather(&sources, &pieces)?;

    let mut output_shape = first_data.shape.clone();
    output_shape.insert(dim, tensors.len());
    Ok(Tensor::from_valid_buffer(buffer, output_shape))
}

#[cfg(test)]
#[path = "stack_test.rs"]
mod tests;
