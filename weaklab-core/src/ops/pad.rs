use std::sync::Arc;

use log::debug;
use num_traits::{NumCast, One, Zero};

use crate::buffer::Buffer;
use crate::error::WeakLabError;
use crate::ops::stack::stack_op;
use crate::tensor::Tensor;
use crate::types::DType;

/// Pads a batch of 1-D sequences into a `[batch_size, max_seq_len]` tensor.
///
/// `max_seq_len` is the longest sequence in the batch, capped at `max_len`
/// when `0 < max_len < longest`. Longer sequences are truncated: from the
/// front when `left_padded`, from the back otherwise.
///
/// Returns `(padded, mask)`. `mask` has the dtype of the batch and holds 1
/// wherever the padded batch equals `pad_value` (so real tokens equal to the
/// pad value are masked too), 0 elsewhere.
///
/// # Errors
/// - `EmptyTensorList` for an empty batch.
/// - `RankMismatch` if an item is not 1-D.
/// - `DataTypeMismatch` if items do not share a dtype.
/// - `UnsupportedOperation` if `pad_value` cannot be represented in the dtype.
pub fn pad_batch(
    batch: &[Tensor],
    max_len: usize,
    pad_value: f64,
    left_padded: bool,
) -> Result<(Tensor, Tensor), WeakLabError> {
    let first = batch.first().ok_or(WeakLabError::EmptyTensorList)?;
    for item in batch {
        if item.rank() != 1 {
            return Err(WeakLabError::RankMismatch {
                expected: 1,
                actual: item.rank(),
            });
        }
    }

    let longest = batch.iter().map(|item| item.numel()).max().unwrap_or(0);
    let max_seq_len = if max_len > 0 && max_len < longest {
        debug!("pad_batch: truncating sequences from {} to {}", longest, max_len);
        max_len
    } else {
        longest
    };
    let shape = vec![batch.len(), max_seq_len];

    let (padded, mask) = match first.dtype() {
        DType::F32 => {
            let rows = batch
                .iter()
                .map(|t| t.read_data().buffer.try_get_f32().map(|d| d.as_slice()))
                .collect::<Result<Vec<_>, _>>()?;
            let (p, m) = pad_rows(&rows, max_seq_len, cast_pad(pad_value, DType::F32)?, left_padded);
            (Buffer::F32(Arc::new(p)), Buffer::F32(Arc::new(m)))
        }
        DType::F64 => {
            let rows = batch
                .iter()
                .map(|t| t.read_data().buffer.try_get_f64().map(|d| d.as_slice()))
                .collect::<Result<Vec<_>, _>>()?;
            let (p, m) = pad_rows(&rows, max_seq_len, pad_value, left_padded);
            (Buffer::F64(Arc::new(p)), Buffer::F64(Arc::new(m)))
        }
        DType::I64 => {
            let rows = batch
                .iter()
                .map(|t| t.read_data().buffer.try_get_i64().map(|d| d.as_slice()))
                .collect::<Result<Vec<_>, _>>()?;
            let (p, m) = pad_rows(&rows, max_seq_len, cast_pad(pad_value, DType::I64)?, left_padded);
            (Buffer::I64(Arc::new(p)), Buffer::I64(Arc::new(m)))
        }
    };

    Ok((
        Tensor::from_valid_buffer(padded, shape.clone()),
        Tensor::from_valid_buffer(mask, shape),
    ))
}

/// Merges a list of per-sample tensors into one batch tensor.
///
/// - all scalars: stacked into a 1-D tensor;
/// - all the same shape and not 1-D: stacked along a new first dimension;
/// - anything else: each item is flattened and the batch is right-padded with 0.
pub fn list_to_tensor(items: &[Tensor]) -> Result<Tensor, WeakLabError> {
    let first = items.first().ok_or(WeakLabError::EmptyTensorList)?;
    if items.iter().all(|item| item.is_scalar()) {
        return stack_op(items, 0);
    }
    let first_shape = first.shape();
    if items
        .iter()
        .all(|item| item.shape() == first_shape && item.rank() != 1)
    {
        return stack_op(items, 0);
    }
    debug!("list_to_tensor: padding {} items of differing shapes", items.len());
    let flattened: Vec<Tensor> = items.iter().map(|item| item.flatten()).collect();
    let (padded, _mask) = pad_batch(&flattened, 0, 0.0, false)?;
    Ok(padded)
}

fn cast_pad<T: NumCast>(pad_value: f64, dtype: DType) -> Result<T, WeakLabError> {
    T::from(pad_value).ok_or_else(|| {
        WeakLabError::UnsupportedOperation(format!(
            "pad value {} cannot be represented as {:?}",
            pad_value, dtype
        ))
    })
}

fn pad_rows<T>(rows: &[&[T]], max_seq_len: usize, pad: T, left_padded: bool) -> (Vec<T>, Vec<T>)
where
    T: Copy + PartialEq + Zero + One,
{
    let mut padded = vec![pad; rows.len() * max_seq_len];
    for (i, row) in rows.iter().enumerate() {
        let length = row.len().min(max_seq_len);
        let out_row = &mut padded[i * max_seq_len..(i + 1) * max_seq_len];
        if left_padded {
            out_row[max_seq_len - length..].copy_from_slice(&row[row.len() - length..]);
        } else {
            out_row[..length].copy_from_slice(&row[..length]);
        }
    }
    let mask = padded
        .iter()
        .map(|&v| if v == pad { T::one() } else { T::zero() })
        .collect();
    (padded, mask)
}

#[cfg(test)]
#[path = "pad_test.rs"]
mod tests;
