use weaklab_core::{Tensor, WeakLabError};

/// One named column of a [`DictDataset`](super::DictDataset): a tensor whose
/// first dimension indexes samples, or a plain list of strings (raw text,
/// ids) that is carried through batching without being merged.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Tensor(Tensor),
    Strings(Vec<String>),
}

/// The value of one field for a single sample.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Tensor(Tensor),
    String(String),
}

impl Field {
    /// Short name of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Field::Tensor(t) if t.is_scalar() => "scalar tensor",
            Field::Tensor(_) => "tensor",
            Field::Strings(_) => "list of strings",
        }
    }

    /// Number of samples in the column, `None` for a scalar tensor.
    pub fn len(&self) -> Option<usize> {
        match self {
            Field::Tensor(t) => t.len_first_dim(),
            Field::Strings(values) => Some(values.len()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }

    pub fn as_tensor(&self) -> Option<&Tensor> {
        match self {
            Field::Tensor(t) => Some(t),
            Field::Strings(_) => None,
        }
    }

    /// Value of sample `index`.
    pub fn get(&self, index: usize) -> Result<FieldValue, WeakLabError> {
        match self {
            Field::Tensor(t) => t.row(index).map(FieldValue::Tensor),
            Field::Strings(values) => values
                .get(index)
                .cloned()
                .map(FieldValue::String)
                .ok_or_else(|| WeakLabError::IndexOutOfBounds {
                    index: vec![index],
                    shape: vec![values.len()],
                }),
        }
    }

    /// Gathers the samples at `indices`, in the order given.
    pub fn select(&self, indices: &[usize]) -> Result<Field, WeakLabError> {
        match self {
            Field::Tensor(t) => t.index_select(0, indices).map(Field::Tensor),
            Field::Strings(values) => indices
                .iter()
                .map(|&i| {
                    values.get(i).cloned().ok_or_else(|| WeakLabError::IndexOutOfBounds {
                        index: vec![i],
                        shape: vec![values.len()],
                    })
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Field::Strings),
        }
    }
}

impl From<Tensor> for Field {
    fn from(tensor: Tensor) -> Self {
        Field::Tensor(tensor)
    }
}

impl From<Vec<String>> for Field {
    fn from(values: Vec<String>) -> Self {
        Field::Strings(values)
    }
}

impl FieldValue {
    pub fn as_tensor(&self) -> Option<&Tensor> {
        match self {
            FieldValue::Tensor(t) => Some(t),
            FieldValue::String(_) => None,
        }
    }
}
