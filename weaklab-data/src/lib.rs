//! Data plumbing for weakly supervised multi-task learning.
//!
//! - [`split`]: random, optionally stratified, partitioning of aligned
//!   collections (sequences, dense arrays, sparse matrices, tensors).
//! - [`datasets`]: the [`Dataset`] trait and [`DictDataset`], a dataset of
//!   named feature fields and named label tensors.
//! - [`samplers`], [`dataloader`]: epoch index orders and batching.
//! - [`collate`], [`dict_dataloader`]: merging dict samples into batches.

pub mod collate;
pub mod dataloader;
pub mod datasets;
pub mod dict_dataloader;
pub mod samplers;
pub mod split;

pub use collate::{collate_dicts, XBatch, YBatch};
pub use dataloader::{CollateFn, DataLoader};
pub use datasets::{split_dataset, Dataset, DictDataset, Field, FieldValue, XSample, YSample};
pub use dict_dataloader::{DataLoaderConfig, DictBatch, DictDataLoader};
pub use samplers::{RandomSampler, Sampler, SequentialSampler, SubsetRandomSampler};
pub use split::{
    split_data, split_data_with_rng, split_indices, split_indices_with_rng, Collection, Indexable,
    SplitConfig, SplitOutput, SplitSize, SplitSpec,
};
