// weaklab-data/src/samplers/traits.rs

use std::fmt::Debug;

/// Iterator over dataset indices handed out by a sampler.
pub type IndexIter = Box<dyn Iterator<Item = usize> + Send>;

/// Decides the order (and multiplicity) in which dataset indices are visited.
///
/// Samplers are used by `DataLoader` to draw the indices of one epoch. Random
/// samplers own their generator, so `iter` takes `&mut self` and successive
/// calls give successive epochs.
pub trait Sampler: Debug + Send {
    /// Returns an iterator over the indices of one epoch.
    ///
    /// # Arguments
    ///
    /// * `dataset_len` - The total number of items in the dataset.
    fn iter(&mut self, dataset_len: usize) -> IndexIter;

    /// Returns the number of indices one epoch yields.
    ///
    /// This might be different from `dataset_len`, for samplers with a fixed
    /// number of samples or a fixed subset.
    fn len(&self, dataset_len: usize) -> usize;
}

impl<S: Sampler + ?Sized> Sampler for Box<S> {
    fn iter(&mut self, dataset_len: usize) -> IndexIter {
        (**self).iter(dataset_len)
    }

    fn len(&self, dataset_len: usize) -> usize {
        (**self).len(dataset_len)
    }
}
