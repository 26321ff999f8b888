// weaklab-data/src/samplers/random_sampler.rs

use super::traits::{IndexIter, Sampler};
use log::warn;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// A sampler that randomly samples indices from a dataset.
#[derive(Debug, Clone)]
pub struct RandomSampler {
    replacement: bool,
    num_samples: Option<usize>,
    rng: StdRng,
}

impl RandomSampler {
    /// Creates a new `RandomSampler` seeded from entropy.
    ///
    /// # Arguments
    ///
    /// * `replacement`: If `true`, an index can be selected multiple times.
    /// * `num_samples`: The total number of samples to draw. If `None`, it defaults to the dataset size.
    pub fn new(replacement: bool, num_samples: Option<usize>) -> Self {
        RandomSampler {
            replacement,
            num_samples,
            rng: StdRng::from_entropy(),
        }
    }

    /// Reseeds the sampler so its epochs are reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }
}

impl Sampler for RandomSampler {
    fn iter(&mut self, dataset_len: usize) -> IndexIter {
        if dataset_len == 0 {
            return Box::new(std::iter::empty());
        }

        let actual_num_samples = self.num_samples.unwrap_or(dataset_len);

        if self.replacement {
            let rng = &mut self.rng;
            let indices: Vec<usize> = (0..actual_num_samples)
                .map(|_| rng.gen_range(0..dataset_len))
                .collect();
            Box::new(indices.into_iter())
        } else {
            if actual_num_samples > dataset_len {
                warn!(
                    "RandomSampler: num_samples ({}) > dataset_len ({}) without replacement; yielding no indices",
                    actual_num_samples, dataset_len
                );
                return Box::new(std::iter::empty());
            }
            let mut indices: Vec<usize> = (0..dataset_len).collect();
            indices.shuffle(&mut self.rng);
            indices.truncate(actual_num_samples);
            Box::new(indices.into_iter())
        }
    }

    fn len(&self, dataset_len: usize) -> usize {
        self.num_samples.unwrap_or(dataset_len)
    }
}

#[cfg(test)]
#[path = "random_sampler_test.rs"]
mod tests;
