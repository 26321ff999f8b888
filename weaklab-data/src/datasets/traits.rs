use weaklab_core::WeakLabError;

/// Represents a dataset that can be accessed by index.
///
/// A dataset is a collection of items, where each item can be a single tensor,
/// a `(features, labels)` pair of field maps, or any other type that is
/// `Send + 'static`.
pub trait Dataset {
    /// The type of a single item returned by the dataset.
    type Item: Send + 'static;

    /// Returns the item at the given index.
    ///
    /// # Errors
    ///
    /// Returns `WeakLabError::IndexOutOfBounds` if the index is out of bounds,
    /// or any error raised while assembling the item.
    fn get(&self, index: usize) -> Result<Self::Item, WeakLabError>;

    /// Returns the total number of items in the dataset.
    fn len(&self) -> usize;

    /// Checks if the dataset is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
