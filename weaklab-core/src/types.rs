/// Defines the possible data types for Tensor elements.
///
/// Features are usually floating point, labels and token ids are `I64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DType {
    /// 32-bit floating-point type.
    F32,
    /// 64-bit floating-point type.
    F64,
    /// 64-bit integer type.
    I64,
}

