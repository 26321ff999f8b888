use crate::buffer::Buffer;
use crate::error::WeakLabError;
use crate::tensor::utils::split_at_dim;
use crate::tensor::Tensor;

/// Selects slices along `dim` according to `indices`.
///
/// The output has the shape of the input with `shape[dim]` replaced by
/// `indices.len()`. Slices are emitted in the order of `indices`, so this is
/// the "fancy indexing" used to slice tensors by a (possibly shuffled) list of
/// row ids.
pub fn index_select_op(input: &Tensor, dim: usize, indices: &[usize]) -> Result<Tensor, WeakLabError> {
    let data = input.read_data();
    if dim >= data.shape.len() {
        return Err(WeakLabError::IndexOutOfBounds {
            index: vec![dim],
            shape: data.shape.clone(),
        });
    }
    let (outer, size, inner) = split_at_dim(&data.shape, dim);
    if let Some(&bad) = indices.iter().find(|&&idx| idx >= size) {
        return Err(WeakLabError::IndexOutOfBounds {
            index: vec![bad],
            shape: data.shape.clone(),
        });
    }

    let mut pieces = Vec::with_capacity(outer * indices.len());
    for o in 0..outer {
        let base = o * size * inner;
        for &idx in indices {
            let start = base + idx * inner;
            pieces.push((0, start..start + inner));
        }
    }
    let buffer = Buffer::gather(&[&data.buffer], &pieces)?;

    let mut output_shape = data.shape.clone();
    output_shape[dim] = indices.len();
    Ok(Tensor::from_valid_buffer(buffer, output_shape))
}

#[cfg(test)]
#[path = "index_select_test.rs"]
mod tests;
