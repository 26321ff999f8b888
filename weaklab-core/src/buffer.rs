use std::ops::Range;
use std::sync::Arc;

use crate::error::WeakLabError;
use crate::types::DType;

/// Typed CPU storage behind a tensor.
///
/// The vectors are wrapped in `Arc` so that cloning a tensor (or a buffer)
/// never copies element data.
#[derive(Debug, Clone, PartialEq)]
pub enum Buffer {
    /// Buffer holding f32 data.
    F32(Arc<Vec<f32>>),
    /// Buffer holding f64 data.
    F64(Arc<Vec<f64>>),
    /// Buffer holding i64 data.
    I64(Arc<Vec<i64>>),
}

impl Buffer {
    /// Returns the number of elements in the buffer.
    pub fn len(&self) -> usize {
        match self {
            Buffer::F32(data) => data.len(),
            Buffer::F64(data) => data.len(),
            Buffer::I64(data) => data.len(),
        }
    }

    /// Returns true if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The element type stored in this buffer.
    pub fn dtype(&self) -> DType {
        match self {
            Buffer::F32(_) => DType::F32,
            Buffer::F64(_) => DType::F64,
            Buffer::I64(_) => DType::I64,
        }
    }

    /// Attempts to get a reference to the underlying `Arc<Vec<f32>>`.
    ///
    /// Returns an error if the buffer is not of type F32.
    pub fn try_get_f32(&self) -> Result<&Arc<Vec<f32>>, WeakLabError> {
        match self {
            Buffer::F32(data_arc) => Ok(data_arc),
            other => Err(WeakLabError::DataTypeMismatch {
                expected: DType::F32,
                actual: other.dtype(),
                operation: "try_get_f32".to_string(),
            }),
        }
    }

    /// Attempts to get a reference to the underlying `Arc<Vec<f64>>`.
    pub fn try_get_f64(&self) -> Result<&Arc<Vec<f64>>, WeakLabError> {
        match self {
            Buffer::F64(data_arc) => Ok(data_arc),
            other => Err(WeakLabError::DataTypeMismatch {
                expected: DType::F64,
                actual: other.dtype(),
                operation: "try_get_f64".to_string(),
            }),
        }
    }

    /// Attempts to get a reference to the underlying `Arc<Vec<i64>>`.
    pub fn try_get_i64(&self) -> Result<&Arc<Vec<i64>>, WeakLabError> {
        match self {
            Buffer::I64(data_arc) => Ok(data_arc),
            other => Err(WeakLabError::DataTypeMismatch {
                expected: DType::I64,
                actual: other.dtype(),
                operation: "try_get_i64".to_string(),
            }),
        }
    }

    /// Builds a new buffer by concatenating element ranges taken from `sources`.
    ///
    /// Each piece is `(source_index, range)`. All sources must share the dtype of
    /// the first one; pieces are copied in the order given.
    pub(crate) fn gather(
        sources: &[&Buffer],
        pieces: &[(usize, Range<usize>)],
    ) -> Result<Buffer, WeakLabError> {
        let first = sources.first().ok_or(WeakLabError::EmptyTensorList)?;
        match first.dtype() {
            DType::F32 => {
                let slices = sources
                    .iter()
                    .map(|b| b.try_get_f32().map(|data| data.as_slice()))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Buffer::F32(Arc::new(gather_pieces(&slices, pieces)?)))
            }
            DType::F64 => {
                let slices = sources
                    .iter()
                    .map(|b| b.try_get_f64().map(|data| data.as_slice()))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Buffer::F64(Arc::new(gather_pieces(&slices, pieces)?)))
            }
            DType::I64 => {
                let slices = sources
                    .iter()
                    .map(|b| b.try_get_i64().map(|data| data.as_slice()))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Buffer::I64(Arc::new(gather_pieces(&slices, pieces)?)))
            }
        }
    }
}

fn gather_pieces<T: Copy>(
    sources: &[&[T]],
    pieces: &[(usize, Range<usize>)],
) -> Result<Vec<T>, WeakLabError> {
    let total = pieces.iter().map(|(_, range)| range.len()).sum();
    let mut output = Vec::with_capacity(total);
    for (source, range) in pieces {
        let data = sources
            .get(*source)
            .and_then(|data| data.get(range.clone()))
            .ok_or_else(|| WeakLabError::IndexOutOfBounds {
                index: vec![*source, range.end],
                shape: vec![sources.len()],
            })?;
        output.extend_from_slice(data);
    }
    Ok(output)
}
