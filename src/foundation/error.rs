/// Convenience result type used across the crate.
pub type ConvResult<T> = Result<T, ConvError>;

/// Error taxonomy for windowing passes.
///
/// Every variant is a caller-input failure: none are transient and none are retried internally.
#[derive(thiserror::Error, Debug)]
pub enum ConvError {
    /// The input value cannot be iterated (dynamic JSON input that is not an array).
    #[error("not iterable: {0}")]
    NotIterable(String),

    /// `stride < 1`.
    #[error("invalid stride: stride must be at least one, got `stride={0}`")]
    InvalidStride(usize),

    /// `kernel_size < 1`.
    #[error("invalid kernel size: kernel_size must be at least one, got `kernel_size={0}`")]
    InvalidKernelSize(usize),

    /// Padding is neither a non-negative integer nor `SAME` / `VALID`.
    #[error("invalid padding: {0}")]
    InvalidPadding(String),

    /// Explicit integer padding below zero.
    #[error("negative padding: padding must be at least zero, got `padding={0}`")]
    NegativePadding(i64),

    /// A per-axis value does not match the number of axes being windowed.
    #[error("axis count mismatch: expected {expected} per-axis values, got {got}")]
    AxisCount {
        /// Number of axes the caller windows over.
        expected: usize,
        /// Number of values supplied.
        got: usize,
    },

    /// A 2-D input whose rows do not all share the same length.
    #[error("ragged matrix: row {row} has {got} columns, expected {expected}")]
    RaggedMatrix {
        /// Index of the first offending row.
        row: usize,
        /// Length of row 0.
        expected: usize,
        /// Length of the offending row.
        got: usize,
    },

    /// Windowing over more than two axes.
    #[error("not implemented: {0}")]
    NotImplementedAxis(String),

    /// Invalid option outside the window geometry itself (for example a thread count).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ConvError {
    /// Build a [`ConvError::NotIterable`] value.
    pub fn not_iterable(msg: impl Into<String>) -> Self {
        Self::NotIterable(msg.into())
    }

    /// Build a [`ConvError::InvalidPadding`] value.
    pub fn invalid_padding(msg: impl Into<String>) -> Self {
        Self::InvalidPadding(msg.into())
    }

    /// Build a [`ConvError::NotImplementedAxis`] value.
    pub fn not_implemented_axis(msg: impl Into<String>) -> Self {
        Self::NotImplementedAxis(msg.into())
    }

    /// Build a [`ConvError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ConvError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for ConvError {
    fn from(e: serde_json::Error) -> Self {
        Self::serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
