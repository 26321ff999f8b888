use std::collections::BTreeMap;
use std::hash::Hash;

use log::debug;
use weaklab_core::{Tensor, WeakLabError};

use super::field::{Field, FieldValue};
use super::traits::Dataset;
use crate::split::{split_indices, SplitConfig};

/// Features of one sample, keyed by field name.
pub type XSample = BTreeMap<String, FieldValue>;
/// Labels of one sample, keyed by label name.
pub type YSample = BTreeMap<String, Tensor>;

/// A dataset holding several named feature fields and several named label sets.
///
/// Every label must be a tensor whose first dimension indexes samples; features
/// may be tensors or lists of strings. Item `i` is the pair of maps holding row
/// `i` of every feature field and of every label tensor.
///
/// `name` identifies the dataset and `split` the partition it holds
/// (e.g. `"train"`), which downstream code uses to route batches.
#[derive(Debug, Clone, PartialEq)]
pub struct DictDataset {
    name: String,
    split: String,
    x_dict: BTreeMap<String, Field>,
    y_dict: BTreeMap<String, Tensor>,
}

impl DictDataset {
    /// Creates a new `DictDataset`.
    ///
    /// # Errors
    ///
    /// Returns `WeakLabError::InvalidLabel` naming the field if a label is not
    /// a tensor with at least one dimension, and `WeakLabError::LengthMismatch`
    /// if label tensors disagree on their first dimension.
    pub fn new(
        name: impl Into<String>,
        split: impl Into<String>,
        x_dict: BTreeMap<String, Field>,
        y_dict: BTreeMap<String, Field>,
    ) -> Result<Self, WeakLabError> {
        let mut labels = BTreeMap::new();
        let mut n_samples: Option<usize> = None;
        for (label_name, label) in y_dict {
            match label {
                Field::Tensor(tensor) if !tensor.is_scalar() => {
                    let rows = tensor.len_first_dim().unwrap_or(0);
                    match n_samples {
                        Some(expected) if expected != rows => {
                            return Err(WeakLabError::LengthMismatch {
                                expected,
                                actual: rows,
                                context: format!("label {}", label_name),
                            })
                        }
                        _ => n_samples = Some(rows),
                    }
                    labels.insert(label_name, tensor);
                }
                other => {
                    return Err(WeakLabError::InvalidLabel {
                        name: label_name,
                        found: other.kind().to_string(),
                    })
                }
            }
        }
        Ok(DictDataset {
            name: name.into(),
            split: split.into(),
            x_dict,
            y_dict: labels,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn split(&self) -> &str {
        &self.split
    }

    pub fn x_dict(&self) -> &BTreeMap<String, Field> {
        &self.x_dict
    }

    pub fn y_dict(&self) -> &BTreeMap<String, Tensor> {
        &self.y_dict
    }

    /// Builds a dataset holding only the samples at `indices` (in that order),
    /// labelled with a new split name.
    pub fn subset(&self, indices: &[usize], split: impl Into<String>) -> Result<Self, WeakLabError> {
        let x_dict = self
            .x_dict
            .iter()
            .map(|(name, field)| field.select(indices).map(|f| (name.clone(), f)))
            .collect::<Result<BTreeMap<_, _>, WeakLabError>>()?;
        let y_dict = self
            .y_dict
            .iter()
            .map(|(name, label)| label.index_select(0, indices).map(|t| (name.clone(), t)))
            .collect::<Result<BTreeMap<_, _>, WeakLabError>>()?;
        Ok(DictDataset {
            name: self.name.clone(),
            split: split.into(),
            x_dict,
            y_dict,
        })
    }
}

impl Dataset for DictDataset {
    type Item = (XSample, YSample);

    fn get(&self, index: usize) -> Result<Self::Item, WeakLabError> {
        if index >= self.len() {
            return Err(WeakLabError::IndexOutOfBounds {
                index: vec![index],
                shape: vec![self.len()],
            });
        }
        let x_sample = self
            .x_dict
            .iter()
            .map(|(name, field)| field.get(index).map(|v| (name.clone(), v)))
            .collect::<Result<XSample, WeakLabError>>()?;
        let y_sample = self
            .y_dict
            .iter()
            .map(|(name, label)| label.row(index).map(|t| (name.clone(), t)))
            .collect::<Result<YSample, WeakLabError>>()?;
        Ok((x_sample, y_sample))
    }

    /// Number of samples, read from the labels (all share their first
    /// dimension), or 0 when there are no labels.
    fn len(&self) -> usize {
        self.y_dict
            .values()
            .next()
            .and_then(|label| label.len_first_dim())
            .unwrap_or(0)
    }
}

/// Splits `dataset` into one `DictDataset` per entry of `split_names`,
/// partitioning its samples with [`split_indices`].
///
/// `split_names` must have one entry per split in `config.splits`.
pub fn split_dataset<L: Eq + Hash>(
    dataset: &DictDataset,
    split_names: &[&str],
    config: &SplitConfig<'_, L>,
) -> Result<Vec<DictDataset>, WeakLabError> {
    if split_names.len() != config.splits.num_splits() {
        return Err(WeakLabError::invalid_split(format!(
            "Got {} split names for {} splits.",
            split_names.len(),
            config.splits.num_splits()
        )));
    }
    let assignments = split_indices(dataset.len(), config)?;
    debug!(
        "split_dataset: {} samples of {} into {:?}",
        dataset.len(),
        dataset.name,
        split_names
    );
    assignments
        .iter()
        .zip(split_names)
        .map(|(indices, split)| dataset.subset(indices, *split))
        .collect()
}

#[cfg(test)]
#[path = "dict_dataset_test.rs"]
mod tests;
