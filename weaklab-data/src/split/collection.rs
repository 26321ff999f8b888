use std::collections::HashSet;

use ndarray::{Array, ArrayD, Axis, RemoveAxis};
use weaklab_core::{sparse, CsrMatrix, Tensor, WeakLabError};

/// A container of aligned samples that can be sliced by row ids.
pub trait Indexable: Sized {
    /// Number of samples (size of the first dimension).
    ///
    /// # Errors
    /// `WeakLabError::UnsupportedCollection` when the container has no row
    /// dimension (a scalar).
    fn n_samples(&self) -> Result<usize, WeakLabError>;

    /// Builds a new container holding the given rows.
    fn take_rows(&self, rows: &[usize]) -> Result<Self, WeakLabError>;
}

fn unsupported(kind: &str) -> WeakLabError {
    WeakLabError::UnsupportedCollection {
        kind: kind.to_string(),
    }
}

fn check_rows(rows: &[usize], n: usize) -> Result<(), WeakLabError> {
    match rows.iter().find(|&&r| r >= n) {
        Some(&bad) => Err(WeakLabError::IndexOutOfBounds {
            index: vec![bad],
            shape: vec![n],
        }),
        None => Ok(()),
    }
}

/// Sequences keep their own row order: a row is kept when its id is among
/// `rows`, regardless of where it appears in `rows`.
impl<T: Clone> Indexable for Vec<T> {
    fn n_samples(&self) -> Result<usize, WeakLabError> {
        Ok(self.len())
    }

    fn take_rows(&self, rows: &[usize]) -> Result<Self, WeakLabError> {
        check_rows(rows, self.len())?;
        let keep: HashSet<usize> = rows.iter().copied().collect();
        Ok(self
            .iter()
            .enumerate()
            .filter(|(i, _)| keep.contains(i))
            .map(|(_, item)| item.clone())
            .collect())
    }
}

impl Indexable for Tensor {
    fn n_samples(&self) -> Result<usize, WeakLabError> {
        self.len_first_dim().ok_or_else(|| unsupported("scalar tensor"))
    }

    fn take_rows(&self, rows: &[usize]) -> Result<Self, WeakLabError> {
        self.n_samples()?;
        self.index_select(0, rows)
    }
}

impl Indexable for CsrMatrix<f64> {
    fn n_samples(&self) -> Result<usize, WeakLabError> {
        Ok(self.nrows())
    }

    fn take_rows(&self, rows: &[usize]) -> Result<Self, WeakLabError> {
        sparse::select_rows(self, rows)
    }
}

impl<A: Clone, D: RemoveAxis> Indexable for Array<A, D> {
    fn n_samples(&self) -> Result<usize, WeakLabError> {
        if self.ndim() == 0 {
            return Err(unsupported("0-dimensional dense array"));
        }
        Ok(self.len_of(Axis(0)))
    }

    fn take_rows(&self, rows: &[usize]) -> Result<Self, WeakLabError> {
        check_rows(rows, self.n_samples()?)?;
        Ok(self.select(Axis(0), rows))
    }
}

/// The closed set of collection kinds `split_data` can slice.
#[derive(Debug, Clone, PartialEq)]
pub enum Collection<T> {
    Sequence(Vec<T>),
    Dense(ArrayD<f64>),
    Sparse(CsrMatrix<f64>),
    Tensor(Tensor),
}

impl<T> Collection<T> {
    /// Human-readable kind, as used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Collection::Sequence(_) => "sequence",
            Collection::Dense(array) if array.ndim() == 0 => "0-dimensional dense array",
            Collection::Dense(_) => "dense array",
            Collection::Sparse(_) => "sparse matrix",
            Collection::Tensor(tensor) if tensor.is_scalar() => "scalar tensor",
            Collection::Tensor(_) => "tensor",
        }
    }

    pub fn as_sequence(&self) -> Option<&[T]> {
        match self {
            Collection::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_dense(&self) -> Option<&ArrayD<f64>> {
        match self {
            Collection::Dense(array) => Some(array),
            _ => None,
        }
    }

    pub fn as_sparse(&self) -> Option<&CsrMatrix<f64>> {
        match self {
            Collection::Sparse(matrix) => Some(matrix),
            _ => None,
        }
    }

    pub fn as_tensor(&self) -> Option<&Tensor> {
        match self {
            Collection::Tensor(tensor) => Some(tensor),
            _ => None,
        }
    }
}

impl<T: Clone> Indexable for Collection<T> {
    fn n_samples(&self) -> Result<usize, WeakLabError> {
        match self {
            Collection::Sequence(items) => items.n_samples(),
            Collection::Dense(array) => array.n_samples(),
            Collection::Sparse(matrix) => matrix.n_samples(),
            Collection::Tensor(tensor) => tensor.n_samples(),
        }
    }

    fn take_rows(&self, rows: &[usize]) -> Result<Self, WeakLabError> {
        Ok(match self {
            Collection::Sequence(items) => Collection::Sequence(items.take_rows(rows)?),
            Collection::Dense(array) => Collection::Dense(array.take_rows(rows)?),
            Collection::Sparse(matrix) => Collection::Sparse(matrix.take_rows(rows)?),
            Collection::Tensor(tensor) => Collection::Tensor(tensor.take_rows(rows)?),
        })
    }
}

impl<T> From<Vec<T>> for Collection<T> {
    fn from(items: Vec<T>) -> Self {
        Collection::Sequence(items)
    }
}

impl<T> From<ArrayD<f64>> for Collection<T> {
    fn from(array: ArrayD<f64>) -> Self {
        Collection::Dense(array)
    }
}

impl<T> From<CsrMatrix<f64>> for Collection<T> {
    fn from(matrix: CsrMatrix<f64>) -> Self {
        Collection::Sparse(matrix)
    }
}

impl<T> From<Tensor> for Collection<T> {
    fn from(tensor: Tensor) -> Self {
        Collection::Tensor(tensor)
    }
}

#[cfg(test)]
#[path = "collection_test.rs"]
mod tests;
