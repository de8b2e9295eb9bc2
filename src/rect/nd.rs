use crate::foundation::error::{ConvError, ConvResult};

/// N-dimensional windowing entry point. Always fails with [`ConvError::NotImplementedAxis`].
///
/// Use [`crate::windowed`] for one axis and [`crate::windowed_2d`] for two.
pub fn windowed_nd<I>(_sequence: I, kernel_size: &[usize]) -> ConvResult<Vec<Vec<I::Item>>>
where
    I: IntoIterator,
{
    tracing::debug!(axes = kernel_size.len(), "n-d windowing requested");
    Err(ConvError::not_implemented_axis(format!(
        "windowing over {} axes is not available; contributions of an n-d implementation are welcome",
        kernel_size.len()
    )))
}

#[cfg(test)]
#[path = "../../tests/unit/rect/nd.rs"]
mod tests;
