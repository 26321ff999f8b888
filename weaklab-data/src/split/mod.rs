//! Random, optionally stratified, partitioning of aligned sample collections.
//!
//! A call resolves the split sizes to fractions, groups row ids into pools
//! (one per stratification label), cuts every pool into contiguous ranges and
//! finally slices each input collection with the resulting index lists.

use std::hash::Hash;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use weaklab_core::WeakLabError;

mod allocate;
mod collection;
mod pools;
mod spec;

pub use collection::{Collection, Indexable};
pub use spec::{SplitSize, SplitSpec};

/// Options for [`split_data`].
///
/// `L` is the stratification label type; it defaults to `usize` and is only
/// fixed once [`SplitConfig::stratify_by`] is called.
#[derive(Debug, Clone)]
pub struct SplitConfig<'a, L = usize> {
    /// Split sizes, as counts or fractions.
    pub splits: SplitSpec,
    /// Shuffle each pool before cutting it. Ignored (always on) when
    /// stratifying.
    pub shuffle: bool,
    /// One label per sample; each label's samples are split separately.
    pub stratify_by: Option<&'a [L]>,
    /// Return the index lists instead of sliced collections.
    pub index_only: bool,
    /// Seed for the generator used when no generator is passed in.
    pub seed: Option<u64>,
}

impl<'a, L> Default for SplitConfig<'a, L> {
    fn default() -> Self {
        SplitConfig {
            splits: SplitSpec::default(),
            shuffle: true,
            stratify_by: None,
            index_only: false,
            seed: None,
        }
    }
}

impl<'a> SplitConfig<'a, usize> {
    pub fn new(splits: impl Into<SplitSpec>) -> Self {
        SplitConfig {
            splits: splits.into(),
            ..Default::default()
        }
    }
}

impl<'a, L> SplitConfig<'a, L> {
    pub fn shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    pub fn index_only(mut self, index_only: bool) -> Self {
        self.index_only = index_only;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Stratifies on `labels`, which must hold one label per sample.
    pub fn stratify_by<M>(self, labels: &'a [M]) -> SplitConfig<'a, M> {
        SplitConfig {
            splits: self.splits,
            shuffle: self.shuffle,
            stratify_by: Some(labels),
            index_only: self.index_only,
            seed: self.seed,
        }
    }

    /// Whether pools get shuffled for this configuration.
    pub fn shuffles(&self) -> bool {
        self.shuffle || self.stratify_by.is_some()
    }
}

/// Result of [`split_data`].
#[derive(Debug, Clone, PartialEq)]
pub enum SplitOutput<C> {
    /// One row-id list per split (`index_only`).
    Indices(Vec<Vec<usize>>),
    /// One sub-collection per split, for a single input collection.
    Single(Vec<C>),
    /// For each input collection, one sub-collection per split.
    Multiple(Vec<Vec<C>>),
}

impl<C> SplitOutput<C> {
    pub fn into_indices(self) -> Option<Vec<Vec<usize>>> {
        match self {
            SplitOutput::Indices(indices) => Some(indices),
            _ => None,
        }
    }

    pub fn into_single(self) -> Option<Vec<C>> {
        match self {
            SplitOutput::Single(splits) => Some(splits),
            _ => None,
        }
    }

    pub fn into_multiple(self) -> Option<Vec<Vec<C>>> {
        match self {
            SplitOutput::Multiple(splits) => Some(splits),
            _ => None,
        }
    }
}

/// Generator for a call that was not handed one.
fn config_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Partitions the row ids `0..n` according to `config`.
pub fn split_indices<L: Eq + Hash>(
    n: usize,
    config: &SplitConfig<'_, L>,
) -> Result<Vec<Vec<usize>>, WeakLabError> {
    let mut rng = config_rng(config.seed);
    split_indices_with_rng(n, config, &mut rng)
}

/// Like [`split_indices`], drawing randomness from `rng` (`config.seed` is
/// ignored).
pub fn split_indices_with_rng<L: Eq + Hash, R: Rng + ?Sized>(
    n: usize,
    config: &SplitConfig<'_, L>,
    rng: &mut R,
) -> Result<Vec<Vec<usize>>, WeakLabError> {
    let fractions = config.splits.resolve(n)?;
    let pools = pools::build_pools(n, config.stratify_by)?;
    debug!(
        "splitting {} samples into {} splits from {} pool(s), shuffle={}",
        n,
        fractions.len(),
        pools.len(),
        config.shuffles()
    );
    Ok(allocate::allocate(pools, &fractions, config.shuffles(), rng))
}

/// Splits aligned collections into random, optionally stratified, subsets.
///
/// All `collections` must hold the same number of samples. The generator is
/// seeded from `config.seed`, or from entropy when there is none.
///
/// # Errors
/// - `WeakLabError::InvalidSplit` for an invalid split specification or an
///   empty `collections` slice.
/// - `WeakLabError::LengthMismatch` for misaligned collections or labels.
/// - `WeakLabError::UnsupportedCollection` for collections without rows.
pub fn split_data<C: Indexable, L: Eq + Hash>(
    collections: &[C],
    config: &SplitConfig<'_, L>,
) -> Result<SplitOutput<C>, WeakLabError> {
    let mut rng = config_rng(config.seed);
    split_data_with_rng(collections, config, &mut rng)
}

/// Like [`split_data`], drawing randomness from `rng` (`config.seed` is
/// ignored).
pub fn split_data_with_rng<C: Indexable, L: Eq + Hash, R: Rng + ?Sized>(
    collections: &[C],
    config: &SplitConfig<'_, L>,
    rng: &mut R,
) -> Result<SplitOutput<C>, WeakLabError> {
    let n = common_len(collections)?;
    let assignments = split_indices_with_rng(n, config, rng)?;
    if config.index_only {
        return Ok(SplitOutput::Indices(assignments));
    }

    let mut outputs = collections
        .iter()
        .map(|collection| {
            assignments
                .iter()
                .map(|rows| collection.take_rows(rows))
                .collect::<Result<Vec<C>, _>>()
        })
        .collect::<Result<Vec<Vec<C>>, _>>()?;
    if outputs.len() == 1 {
        Ok(SplitOutput::Single(outputs.remove(0)))
    } else {
        Ok(SplitOutput::Multiple(outputs))
    }
}

fn common_len<C: Indexable>(collections: &[C]) -> Result<usize, WeakLabError> {
    let (first, rest) = collections
        .split_first()
        .ok_or_else(|| WeakLabError::invalid_split("split_data() needs at least one collection."))?;
    let n = first.n_samples()?;
    for (i, collection) in rest.iter().enumerate() {
        let actual = collection.n_samples()?;
        if actual != n {
            return Err(WeakLabError::LengthMismatch {
                expected: n,
                actual,
                context: format!("collection {}", i + 1),
            });
        }
    }
    Ok(n)
}

#[cfg(test)]
#[path = "split_test.rs"]
mod tests;
