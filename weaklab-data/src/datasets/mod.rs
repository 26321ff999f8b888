pub mod dict_dataset;
pub mod field;
pub mod traits;

pub use dict_dataset::{split_dataset, DictDataset, XSample, YSample};
pub use field::{Field, FieldValue};
pub use traits::Dataset;
