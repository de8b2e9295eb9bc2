use crate::{
    foundation::error::{ConvError, ConvResult},
    window::padding::Padding,
};

/// What happens to elements left over after the last full window.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TailPolicy {
    /// Stop after the last full window.
    #[default]
    Drop,
    /// Emit one final window holding the remaining elements, shorter than the kernel.
    Truncate,
    /// Emit one final window holding the remaining elements, right-filled to the kernel size.
    Pad,
}

impl TailPolicy {
    /// Map the `include_incomplete_pass` flag onto a policy.
    pub fn from_incomplete_pass(include_incomplete_pass: bool) -> Self {
        if include_incomplete_pass {
            Self::Truncate
        } else {
            Self::Drop
        }
    }
}

/// Window configuration for one 1-D pass.
#[derive(Clone, Debug, PartialEq)]
pub struct WindowSpec<T> {
    /// Elements per window.
    pub kernel_size: usize,
    /// Step between successive window starts.
    pub stride: usize,
    /// Boundary padding on both ends.
    pub padding: Padding,
    /// Fill value for padding and out-of-range positions.
    pub default_value: T,
    /// Handling of the trailing remainder.
    pub tail: TailPolicy,
}

impl<T> WindowSpec<T> {
    /// Kernel of `kernel_size`, stride 1, no padding, trailing remainder dropped.
    pub fn new(kernel_size: usize, default_value: T) -> Self {
        Self {
            kernel_size,
            stride: 1,
            padding: Padding::default(),
            default_value,
            tail: TailPolicy::Drop,
        }
    }

    /// Set the stride.
    pub fn stride(mut self, stride: usize) -> Self {
        self.stride = stride;
        self
    }

    /// Set the padding.
    pub fn padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = padding.into();
        self
    }

    /// Set the tail policy.
    pub fn tail(mut self, tail: TailPolicy) -> Self {
        self.tail = tail;
        self
    }

    /// Set the tail policy from the `include_incomplete_pass` flag.
    pub fn include_incomplete_pass(self, include: bool) -> Self {
        self.tail(TailPolicy::from_incomplete_pass(include))
    }

    /// Validate kernel and stride, and resolve padding.
    pub fn geometry(&self) -> ConvResult<WindowGeometry> {
        WindowGeometry::new(self.kernel_size, self.stride, self.padding)
    }
}

impl<T: Default> Default for WindowSpec<T> {
    fn default() -> Self {
        Self::new(1, T::default())
    }
}

/// Validated kernel, stride and resolved padding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WindowGeometry {
    /// Elements per window, `>= 1`.
    pub kernel_size: usize,
    /// Step between window starts, `>= 1`.
    pub stride: usize,
    /// Fill values added on each side.
    pub padding: usize,
}

impl WindowGeometry {
    /// Validate `kernel_size` and `stride`, then resolve `padding` against the kernel.
    pub fn new(kernel_size: usize, stride: usize, padding: Padding) -> ConvResult<Self> {
        if kernel_size < 1 {
            tracing::debug!(kernel_size, "rejecting kernel size");
            return Err(ConvError::InvalidKernelSize(kernel_size));
        }
        if stride < 1 {
            tracing::debug!(stride, "rejecting stride");
            return Err(ConvError::InvalidStride(stride));
        }
        Ok(Self {
            kernel_size,
            stride,
            padding: padding.resolve(kernel_size),
        })
    }

    /// Fill values appended on the right so the last full window ends on a stride boundary.
    ///
    /// `len` is the length after boundary padding.
    pub fn remainder(&self, len: usize) -> usize {
        let (k, s) = (self.kernel_size, self.stride);
        if len >= k {
            (s - (len - k) % s) % s
        } else {
            (k - len) % s
        }
    }

    /// Length after boundary padding and remainder fill, saturating at `usize::MAX`.
    pub fn padded_len(&self, len: usize) -> usize {
        let len = len.saturating_add(self.padding.saturating_mul(2));
        len.saturating_add(self.remainder(len))
    }

    /// Number of windows a pass over `len` source elements emits.
    pub fn window_count(&self, len: usize, tail: TailPolicy) -> usize {
        count_from(0, self.padded_len(len), self.kernel_size, self.stride, tail)
    }
}

/// Windows still to be emitted by a cursor at `index` over a padded length of `len`.
pub(crate) fn count_from(
    index: usize,
    len: usize,
    kernel_size: usize,
    stride: usize,
    tail: TailPolicy,
) -> usize {
    let (full, next) = match index.checked_add(kernel_size) {
        Some(end) if end <= len => {
            let full = (len - end) / stride + 1;
            // Start of the last full window; at most `len - kernel_size`.
            let last = index + (full - 1) * stride;
            (full, last.checked_add(stride))
        }
        _ => (0, Some(index)),
    };
    let trailing = tail != TailPolicy::Drop && next.is_some_and(|next| next < len);
    full + usize::from(trailing)
}

#[cfg(test)]
#[path = "../../tests/unit/window/spec.rs"]
mod tests;
