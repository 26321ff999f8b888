//! Tensor operations needed by the data layer: row access, gathering rows,
//! stacking and padding per-sample tensors into batches.

pub mod index_select;
pub mod pad;
pub mod stack;
pub mod view;

pub use index_select::index_select_op;
pub use pad::{list_to_tensor, pad_batch};
pub use stack::stack_op;
