//! Loader over a [`DictDataset`] producing `(XBatch, YBatch)` batches.

use crate::collate::{collate_dicts, XBatch, YBatch};
use crate::dataloader::{CollateFn, DataLoader};
use crate::datasets::{DictDataset, XSample, YSample};
use crate::samplers::{RandomSampler, Sampler, SequentialSampler};
use weaklab_core::WeakLabError;

/// One collated batch of a [`DictDataLoader`].
pub type DictBatch = (XBatch, YBatch);

/// Batching options for [`DictDataLoader`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataLoaderConfig {
    pub batch_size: usize,
    /// Visit samples in a new random order every epoch.
    pub shuffle: bool,
    pub drop_last: bool,
    /// Seed for the shuffling sampler; entropy when `None`.
    pub seed: Option<u64>,
}

impl Default for DataLoaderConfig {
    fn default() -> Self {
        DataLoaderConfig {
            batch_size: 1,
            shuffle: false,
            drop_last: false,
            seed: None,
        }
    }
}

impl DataLoaderConfig {
    pub fn batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    pub fn drop_last(mut self, drop_last: bool) -> Self {
        self.drop_last = drop_last;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn sampler(&self) -> Box<dyn Sampler> {
        if !self.shuffle {
            return Box::new(SequentialSampler::new());
        }
        let sampler = RandomSampler::new(false, None);
        match self.seed {
            Some(seed) => Box::new(sampler.with_seed(seed)),
            None => Box::new(sampler),
        }
    }
}

/// A [`DataLoader`] over a [`DictDataset`] that merges samples with
/// [`collate_dicts`].
///
/// The dataset's `name` and `split` stay reachable so batches can be routed
/// by the split they come from.
pub struct DictDataLoader {
    loader: DataLoader<DictDataset, Box<dyn Sampler>, DictBatch>,
}

impl DictDataLoader {
    /// Creates a loader drawing sequential or shuffled epochs, per `config`.
    pub fn new(dataset: DictDataset, config: DataLoaderConfig) -> Self {
        let sampler = config.sampler();
        Self::with_sampler(dataset, config, sampler)
    }

    /// Creates a loader drawing indices from `sampler`; `config.shuffle` and
    /// `config.seed` are ignored.
    pub fn with_sampler<S: Sampler + 'static>(
        dataset: DictDataset,
        config: DataLoaderConfig,
        sampler: S,
    ) -> Self {
        let sampler: Box<dyn Sampler> = Box::new(sampler);
        let collate: CollateFn<(XSample, YSample), DictBatch> = Box::new(collate_dicts);
        DictDataLoader {
            loader: DataLoader::new(dataset, config.batch_size, sampler, config.drop_last, collate),
        }
    }

    pub fn dataset(&self) -> &DictDataset {
        self.loader.dataset()
    }

    pub fn name(&self) -> &str {
        self.loader.dataset().name()
    }

    /// The split this loader serves, e.g. `"train"`.
    pub fn split(&self) -> &str {
        self.loader.dataset().split()
    }

    pub fn batch_size(&self) -> usize {
        self.loader.batch_size
    }

    /// Number of batches in one full epoch.
    pub fn num_batches(&self) -> usize {
        self.loader.num_batches()
    }

    /// Starts a new epoch.
    pub fn reset(&mut self) {
        self.loader.reset();
    }
}

impl Iterator for DictDataLoader {
    type Item = Result<DictBatch, WeakLabError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.loader.next()
    }
}

#[cfg(test)]
#[path = "dict_dataloader_test.rs"]
mod tests;
