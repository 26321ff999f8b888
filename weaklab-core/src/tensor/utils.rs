/// Calculates the strides for a given shape.
/// Strides represent the number of elements to skip in the flattened data array
/// to move one step along each dimension.
///
/// Example:
/// shape = [2, 3] -> strides = [3, 1]
/// shape = [2, 2, 2] -> strides = [4, 2, 1]
pub fn calculate_strides(shape: &[usize]) -> Vec<usize> {
    if shape.is_empty() {
        return vec![];
    }
    let rank = shape.len();
    let mut strides = vec![1; rank];
    for i in (0..rank - 1).rev() {
        strides[i] = strides[i + 1] * shape[i + 1];
    }
    strides
}

/// Splits `shape` around `dim` into `(outer, size, inner)` element counts:
/// the product of the dimensions before `dim`, the size of `dim`, and the
/// product of the dimensions after it.
pub fn split_at_dim(shape: &[usize], dim: usize) -> (usize, usize, usize) {
    let outer = shape[..dim].iter().product();
    let size = shape.get(dim).copied().unwrap_or(1);
    let inner = shape.get(dim + 1..).map_or(1, |rest| rest.iter().product());
    (outer, size, inner)
}

#[cfg(test)]
#[path = "utils_test.rs"]
mod tests;
