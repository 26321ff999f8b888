//! Collation of `(features, labels)` samples into batches.

use std::collections::BTreeMap;

use weaklab_core::ops::list_to_tensor;
use weaklab_core::{Tensor, WeakLabError};

use crate::datasets::{Field, FieldValue, XSample, YSample};

/// Features of a batch: one merged tensor, or one list of strings, per field.
pub type XBatch = BTreeMap<String, Field>;
/// Labels of a batch: one merged tensor per label.
pub type YBatch = BTreeMap<String, Tensor>;

enum Column {
    Tensors(Vec<Tensor>),
    Strings(Vec<String>),
}

/// Merges a batch of samples into per-field batch values.
///
/// Values are grouped by field name. Tensor-valued features and every label
/// are merged with [`list_to_tensor`] (stacked, or flattened and padded with 0
/// when shapes differ). String features stay a list, in batch order. A field
/// missing from some samples only collects the samples that have it.
///
/// # Errors
/// - `WeakLabError::UnsupportedOperation` if a feature field holds tensors for
///   some samples and strings for others.
/// - Any error of [`list_to_tensor`], e.g. mismatched dtypes.
pub fn collate_dicts(batch: Vec<(XSample, YSample)>) -> Result<(XBatch, YBatch), WeakLabError> {
    let mut x_columns: BTreeMap<String, Column> = BTreeMap::new();
    let mut y_columns: BTreeMap<String, Vec<Tensor>> = BTreeMap::new();

    for (x_sample, y_sample) in batch {
        for (name, value) in x_sample {
            let column = x_columns.entry(name.clone()).or_insert_with(|| match &value {
                FieldValue::Tensor(_) => Column::Tensors(Vec::new()),
                FieldValue::String(_) => Column::Strings(Vec::new()),
            });
            match (column, value) {
                (Column::Tensors(values), FieldValue::Tensor(t)) => values.push(t),
                (Column::Strings(values), FieldValue::String(s)) => values.push(s),
                _ => {
                    return Err(WeakLabError::UnsupportedOperation(format!(
                        "Field {} mixes tensors and strings across the batch",
                        name
                    )))
                }
            }
        }
        for (name, value) in y_sample {
            y_columns.entry(name).or_default().push(value);
        }
    }

    let mut x_batch = XBatch::new();
    for (name, column) in x_columns {
        let field = match column {
            Column::Tensors(values) => Field::Tensor(list_to_tensor(&values)?),
            Column::Strings(values) => Field::Strings(values),
        };
        x_batch.insert(name, field);
    }
    let mut y_batch = YBatch::new();
    for (name, values) in y_columns {
        y_batch.insert(name, list_to_tensor(&values)?);
    }
    Ok((x_batch, y_batch))
}

#[cfg(test)]
#[path = "collate_test.rs"]
mod tests;
