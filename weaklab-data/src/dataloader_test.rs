use super::*;
use crate::samplers::{RandomSampler, SequentialSampler, SubsetRandomSampler};

/// Dataset of consecutive integers.
struct Numbers(Vec<i64>);

impl Dataset for Numbers {
    type Item = i64;

    fn get(&self, index: usize) -> Result<i64, WeakLabError> {
        self.0.get(index).copied().ok_or(WeakLabError::IndexOutOfBounds {
            index: vec![index],
            shape: vec![self.0.len()],
        })
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

fn collect_batches<B>(loader: DataLoader<Numbers, impl Sampler, B>) -> Vec<B> {
    loader.map(|batch| batch.expect("Batch should not error")).collect()
}

#[test]
fn test_dataloader_sequential() {
    let loader = DataLoader::with_default_collate(Numbers(vec![1, 2, 3, 4, 5, 6]), 2, SequentialSampler::new(), false);
    assert_eq!(loader.num_batches(), 3);
    let batches = collect_batches(loader);
    assert_eq!(batches, vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
}

#[test]
fn test_dataloader_drop_last() {
    let loader = DataLoader::with_default_collate(Numbers(vec![1, 2, 3, 4, 5]), 2, SequentialSampler::new(), true);
    assert_eq!(loader.num_batches(), 2);
    let batches = collect_batches(loader);
    assert_eq!(batches, vec![vec![1, 2], vec![3, 4]]); // the trailing batch of 1 is dropped
}

#[test]
fn test_dataloader_keeps_short_last_batch() {
    let loader = DataLoader::with_default_collate(Numbers(vec![1, 2, 3, 4, 5]), 2, SequentialSampler::new(), false);
    assert_eq!(loader.num_batches(), 3);
    assert_eq!(collect_batches(loader).last(), Some(&vec![5]));
}

#[test]
fn test_dataloader_custom_collate() {
    let sum: CollateFn<i64, i64> = Box::new(|batch| Ok(batch.into_iter().sum()));
    let loader = DataLoader::new(Numbers(vec![1, 2, 3, 4]), 3, SequentialSampler::new(), false, sum);
    assert_eq!(collect_batches(loader), vec![6, 4]);
}

#[test]
fn test_dataloader_collate_error_is_returned() {
    let failing: CollateFn<i64, ()> =
        Box::new(|_| Err(WeakLabError::UnsupportedOperation("collate".to_string())));
    let mut loader = DataLoader::new(Numbers(vec![1]), 1, SequentialSampler::new(), false, failing);
    assert!(matches!(loader.next(), Some(Err(WeakLabError::UnsupportedOperation(_)))));
}

#[test]
fn test_dataloader_reset_starts_new_epoch() {
    let mut loader = DataLoader::with_default_collate(Numbers((0..10).collect()), 4, RandomSampler::new(false, None).with_seed(1), false);
    let first: Vec<i64> = loader.by_ref().flat_map(|b| b.unwrap()).collect();
    assert!(loader.next().is_none());
    loader.reset();
    let second: Vec<i64> = loader.by_ref().flat_map(|b| b.unwrap()).collect();
    assert_eq!(first.len(), 10);
    assert_eq!(second.len(), 10);
    assert_ne!(first, second);
}

#[test]
fn test_dataloader_subset_sampler() {
    let sampler = SubsetRandomSampler::new(vec![1, 3, 5]).with_seed(0);
    let loader = DataLoader::with_default_collate(Numbers((0..10).collect()), 2, sampler, false);
    assert_eq!(loader.num_batches(), 2);
    let mut seen: Vec<i64> = collect_batches(loader).into_iter().flatten().collect();
    seen.sort_unstable();
    assert_eq!(seen, vec![1, 3, 5]);
}

#[test]
fn test_dataloader_zero_batch_size() {
    let mut loader = DataLoader::with_default_collate(Numbers(vec![1, 2]), 0, SequentialSampler::new(), false);
    assert_eq!(loader.num_batches(), 0);
    assert!(loader.next().is_none());
}

#[test]
fn test_dataloader_fetch_error_is_returned() {
    let sampler = SubsetRandomSampler::new(vec![7]);
    let mut loader = DataLoader::with_default_collate(Numbers(vec![1, 2]), 1, sampler, false);
    assert!(matches!(loader.next(), Some(Err(WeakLabError::IndexOutOfBounds { .. }))));
}
