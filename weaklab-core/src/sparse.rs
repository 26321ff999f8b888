//! Compressed-sparse-row matrices.
//!
//! Label matrices produced by labeling functions are mostly abstains, so they
//! are usually held in CSR form. Storage is `nalgebra_sparse::CsrMatrix<f64>`;
//! this module adds triplet construction with bounds errors, row gathering and
//! densification, which is all the splitter needs.

use nalgebra_sparse::{CooMatrix, CsrMatrix};

use crate::error::WeakLabError;
use crate::tensor::Tensor;

fn format_error(err: nalgebra_sparse::SparseFormatError) -> WeakLabError {
    WeakLabError::InvalidSparseMatrix(err.to_string())
}

/// Builds a matrix from `(row, col, value)` triplets. Duplicate coordinates
/// are summed.
///
/// # Errors
/// `WeakLabError::IndexOutOfBounds` for a triplet outside `shape`.
pub fn from_triplets(
    shape: (usize, usize),
    triplets: &[(usize, usize, f64)],
) -> Result<CsrMatrix<f64>, WeakLabError> {
    let (n_rows, n_cols) = shape;
    if let Some(&(r, c, _)) = triplets.iter().find(|&&(r, c, _)| r >= n_rows || c >= n_cols) {
        return Err(WeakLabError::IndexOutOfBounds {
            index: vec![r, c],
            shape: vec![n_rows, n_cols],
        });
    }
    let rows: Vec<usize> = triplets.iter().map(|&(r, _, _)| r).collect();
    let cols: Vec<usize> = triplets.iter().map(|&(_, c, _)| c).collect();
    let values: Vec<f64> = triplets.iter().map(|&(_, _, v)| v).collect();
    let coo = CooMatrix::try_from_triplets(n_rows, n_cols, rows, cols, values)
        .map_err(format_error)?;
    Ok(CsrMatrix::from(&coo))
}

/// Gathers `rows` into a new matrix, in the order given. Rows may repeat.
pub fn select_rows(
    matrix: &CsrMatrix<f64>,
    rows: &[usize],
) -> Result<CsrMatrix<f64>, WeakLabError> {
    let mut offsets = Vec::with_capacity(rows.len() + 1);
    offsets.push(0);
    let mut cols = Vec::new();
    let mut values = Vec::new();
    for &r in rows {
        let row = matrix.get_row(r).ok_or_else(|| WeakLabError::IndexOutOfBounds {
            index: vec![r],
            shape: vec![matrix.nrows(), matrix.ncols()],
        })?;
        cols.extend_from_slice(row.col_indices());
        values.extend_from_slice(row.values());
        offsets.push(cols.len());
    }
    CsrMatrix::try_from_csr_data(rows.len(), matrix.ncols(), offsets, cols, values)
        .map_err(format_error)
}

/// Densifies into an F64 tensor of shape `[n_rows, n_cols]`.
pub fn to_tensor(matrix: &CsrMatrix<f64>) -> Result<Tensor, WeakLabError> {
    let n_cols = matrix.ncols();
    let mut dense = vec![0.0; matrix.nrows() * n_cols];
    for (r, c, &v) in matrix.triplet_iter() {
        dense[r * n_cols + c] = v;
    }
    Tensor::new_f64(dense, vec![matrix.nrows(), n_cols])
}

#[cfg(test)]
#[path = "sparse_test.rs"]
mod tests;
