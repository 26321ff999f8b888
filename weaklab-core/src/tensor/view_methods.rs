// src/tensor/view_methods.rs
use crate::error::WeakLabError;
use crate::ops::{index_select, view};
use crate::tensor::Tensor;

impl Tensor {
    /// Returns row `index` of the first dimension, with that dimension removed
    /// (a `[3, 2]` tensor yields `[2]` rows, a `[3]` tensor yields scalars).
    pub fn row(&self, index: usize) -> Result<Tensor, WeakLabError> {
        view::row_op(self, index)
    }

    /// Returns a rank-1 tensor with the same elements.
    pub fn flatten(&self) -> Tensor {
        view::flatten_op(self)
    }

    /// Gathers `indices` along `dim`, in the order given. Indices may repeat.
    pub fn index_select(&self, dim: usize, indices: &[usize]) -> Result<Tensor, WeakLabError> {
        index_select::index_select_op(self, dim, indices)
    }
}
