//! Splits a small labeled corpus into train/valid/test, stratified by label,
//! and iterates over shuffled batches of the training split.
//!
//! Run with `RUST_LOG=debug` to see the splitter and padding logs.

use std::collections::BTreeMap;

use weaklab_core::{Tensor, WeakLabError};
use weaklab_data::{
    split_data, split_dataset, DataLoaderConfig, Dataset, DictDataLoader, DictDataset, Field,
    SplitConfig,
};

fn corpus() -> Result<DictDataset, WeakLabError> {
    let texts = [
        "great movie", "terrible plot", "loved it", "not for me", "a masterpiece",
        "fell asleep", "would watch again", "waste of time", "brilliant cast", "meh",
    ];
    let n = texts.len();
    let labels: Vec<i64> = (0..n as i64).map(|i| (i + 1) % 2).collect();
    let lengths: Vec<f32> = texts.iter().map(|t| t.split_whitespace().count() as f32).collect();

    let mut x = BTreeMap::new();
    x.insert(
        "text".to_string(),
        Field::from(texts.iter().map(|t| t.to_string()).collect::<Vec<_>>()),
    );
    x.insert("num_words".to_string(), Field::from(Tensor::new(lengths, vec![n])?));
    let mut y = BTreeMap::new();
    y.insert("sentiment".to_string(), Field::from(Tensor::new_i64(labels, vec![n])?));
    DictDataset::new("movie_reviews", "all", x, y)
}

fn main() -> Result<(), WeakLabError> {
    env_logger::init();

    let dataset = corpus()?;
    let labels = dataset.y_dict()["sentiment"].get_i64_data()?;

    // Plain index split of the raw ids.
    let ids: Vec<usize> = (0..dataset.len()).collect();
    let halves = split_data(&[ids], &SplitConfig::new(vec![0.5, 0.5]).seed(0))?;
    println!("Index halves: {:?}", halves);

    // Stratified dataset split.
    let config = SplitConfig::new(vec![0.6, 0.2, 0.2]).seed(42).stratify_by(&labels[..]);
    let splits = split_dataset(&dataset, &["train", "valid", "test"], &config)?;
    for split in &splits {
        println!(
            "{}: {} samples, labels {:?}",
            split.split(),
            split.len(),
            split.y_dict()["sentiment"].get_i64_data()?
        );
    }

    let train = splits.into_iter().next().ok_or_else(|| WeakLabError::invalid_split("no training split"))?;
    let loader = DictDataLoader::new(
        train,
        DataLoaderConfig::default().batch_size(2).shuffle(true).seed(7),
    );
    println!("\n--- {} / {}: {} batches ---", loader.name(), loader.split(), loader.num_batches());
    for (i, batch) in loader.enumerate() {
        let (x, y) = batch?;
        println!("Batch {i}:");
        println!("  text: {:?}", x["text"]);
        println!("  num_words: {:?}", x["num_words"].as_tensor().map(|t| t.to_f64_vec()));
        println!("  sentiment: {:?}", y["sentiment"].get_i64_data()?);
    }
    Ok(())
}
