// weaklab-data/src/samplers/subset_random_sampler.rs

use super::traits::{IndexIter, Sampler};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Randomly permutes a fixed subset of indices every epoch.
///
/// Pairs with `split_data(.., index_only)`: one split's index list becomes
/// the subset a loader draws from.
#[derive(Debug, Clone)]
pub struct SubsetRandomSampler {
    indices: Vec<usize>,
    rng: StdRng,
}

impl SubsetRandomSampler {
    /// Creates a new `SubsetRandomSampler` seeded from entropy.
    ///
    /// # Arguments
    ///
    /// * `indices`: A vector of indices from which to sample randomly.
    pub fn new(indices: Vec<usize>) -> Self {
        SubsetRandomSampler {
            indices,
            rng: StdRng::from_entropy(),
        }
    }

    /// Reseeds the sampler so its epochs are reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }
}

impl Sampler for SubsetRandomSampler {
    fn iter(&mut self, _dataset_len: usize) -> IndexIter {
        let mut indices = self.indices.clone();
        indices.shuffle(&mut self.rng);
        Box::new(indices.into_iter())
    }

    fn len(&self, _dataset_len: usize) -> usize {
        self.indices.len()
    }
}

#[cfg(test)]
#[path = "subset_random_sampler_test.rs"]
mod tests;
