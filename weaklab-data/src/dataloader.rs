// dataloader.rs
//! # DataLoader
//!
//! Batches the items of a [`Dataset`] in the order drawn by a [`Sampler`]
//! and turns every batch into a value of type `B` with a collate function.
//!
//! ```rust
//! use weaklab_core::Tensor;
//! use weaklab_data::{DictDataLoader, DataLoaderConfig, DictDataset, Field};
//! use std::collections::BTreeMap;
//!
//! let mut y = BTreeMap::new();
//! y.insert("label".to_string(), Field::from(Tensor::new_i64(vec![0, 1, 1], vec![3]).unwrap()));
//! let dataset = DictDataset::new("toy", "train", BTreeMap::new(), y).unwrap();
//! let loader = DictDataLoader::new(dataset, DataLoaderConfig::default().batch_size(2));
//! for batch in loader {
//!     let (_x, y) = batch.unwrap();
//!     assert!(y["label"].shape()[0] <= 2);
//! }
//! ```
//!
//! One pass of the iterator is one epoch; [`DataLoader::reset`] draws a new
//! epoch from the sampler.

use crate::datasets::Dataset;
use crate::samplers::traits::IndexIter;
use crate::samplers::Sampler;
use weaklab_core::WeakLabError;

/// Turns the items of one batch into a batch value.
pub type CollateFn<I, B> = Box<dyn Fn(Vec<I>) -> Result<B, WeakLabError> + Send + Sync>;

/// Generic loader for batching and sampling a dataset.
///
/// # Type parameters
/// - `D`: the dataset, implementing [`Dataset`].
/// - `S`: the sampler, implementing [`Sampler`].
/// - `B`: the batch type produced by the collate function (by default the
///   plain `Vec` of items).
pub struct DataLoader<D: Dataset, S: Sampler, B = Vec<<D as Dataset>::Item>> {
    /// The source dataset.
    pub dataset: D,
    /// Number of items per batch.
    pub batch_size: usize,
    /// Draws the indices of each epoch.
    pub sampler: S,
    /// If true, a trailing batch smaller than `batch_size` is skipped.
    pub drop_last: bool,
    collate_fn: CollateFn<D::Item, B>,
    indices_iter: IndexIter,
}

impl<D: Dataset, S: Sampler, B> DataLoader<D, S, B> {
    /// Creates a loader and draws the indices of its first epoch.
    ///
    /// A `batch_size` of 0 yields no batches.
    pub fn new(
        dataset: D,
        batch_size: usize,
        mut sampler: S,
        drop_last: bool,
        collate_fn: CollateFn<D::Item, B>,
    ) -> Self {
        let indices_iter = sampler.iter(dataset.len());
        Self {
            dataset,
            batch_size,
            sampler,
            drop_last,
            collate_fn,
            indices_iter,
        }
    }

    /// Starts a new epoch by drawing fresh indices from the sampler.
    pub fn reset(&mut self) {
        self.indices_iter = self.sampler.iter(self.dataset.len());
    }

    /// Number of batches in one full epoch.
    pub fn num_batches(&self) -> usize {
        if self.batch_size == 0 {
            return 0;
        }
        let n = self.sampler.len(self.dataset.len());
        if self.drop_last {
            n / self.batch_size
        } else {
            n.div_ceil(self.batch_size)
        }
    }

    pub fn dataset(&self) -> &D {
        &self.dataset
    }
}

impl<D: Dataset, S: Sampler> DataLoader<D, S, Vec<D::Item>> {
    /// Creates a loader whose batches are the plain `Vec` of items.
    pub fn with_default_collate(dataset: D, batch_size: usize, sampler: S, drop_last: bool) -> Self {
        let collate_fn: CollateFn<D::Item, Vec<D::Item>> = Box::new(|batch| Ok(batch));
        Self::new(dataset, batch_size, sampler, drop_last, collate_fn)
    }
}

impl<D: Dataset, S: Sampler, B> Iterator for DataLoader<D, S, B> {
    type Item = Result<B, WeakLabError>;

    /// Returns the next batch.
    ///
    /// - `Some(Ok(batch))`: a collated batch.
    /// - `Some(Err(e))`: fetching an item or collating failed.
    /// - `None`: the epoch is over.
    fn next(&mut self) -> Option<Self::Item> {
        let mut batch = Vec::with_capacity(self.batch_size);
        for _ in 0..self.batch_size {
            match self.indices_iter.next() {
                Some(idx) => match self.dataset.get(idx) {
                    Ok(item) => batch.push(item),
                    Err(e) => return Some(Err(e)),
                },
                None => break,
            }
        }
        if batch.is_empty() || (self.drop_last && batch.len() < self.batch_size) {
            return None;
        }
        Some((self.collate_fn)(batch))
    }
}

#[cfg(test)]
#[path = "dataloader_test.rs"]
mod tests;
