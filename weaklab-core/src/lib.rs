//! Tensor collaborators for the weaklab data layer.
//!
//! `weaklab-core` provides a small immutable CPU [`Tensor`], a
//! compressed-sparse-row matrix, the crate-wide error type, and the tensor
//! ops the data layer relies on (row access, row gathering, stacking and
//! padding per-sample tensors into batches).

pub mod buffer;
pub mod error;
pub mod ops;
pub mod sparse;
pub mod tensor;
pub mod tensor_data;
pub mod types;

// Re-export the main types so they are reachable as `weaklab_core::Tensor`, etc.
pub use error::WeakLabError;
pub use nalgebra_sparse::CsrMatrix;
pub use tensor::Tensor;
pub use types::DType;
