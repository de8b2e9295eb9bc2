use std::iter::{FusedIterator, repeat_n};

use crate::{
    foundation::error::ConvResult,
    window::spec::{TailPolicy, WindowGeometry, WindowSpec, count_from},
};

/// Lazy cursor over the windows of one 1-D pass.
///
/// Only the source elements are stored. Boundary padding and the stride remainder fill are
/// positions outside `items` and read as `default_value`.
#[derive(Clone, Debug)]
pub struct Windowed<T> {
    items: Vec<T>,
    lead: usize,
    len: usize,
    geometry: WindowGeometry,
    default_value: T,
    tail: TailPolicy,
    index: usize,
    done: bool,
}

impl<T: Clone> Windowed<T> {
    /// Materialize `sequence` and lay out boundary padding and the stride remainder fill.
    pub fn new(sequence: impl IntoIterator<Item = T>, spec: WindowSpec<T>) -> ConvResult<Self> {
        let geometry = spec.geometry()?;
        Ok(Self::with_geometry(
            sequence,
            geometry,
            spec.default_value,
            spec.tail,
        ))
    }

    pub(crate) fn with_geometry(
        sequence: impl IntoIterator<Item = T>,
        geometry: WindowGeometry,
        default_value: T,
        tail: TailPolicy,
    ) -> Self {
        let items: Vec<T> = sequence.into_iter().collect();
        let len = geometry.padded_len(items.len());

        Self {
            items,
            lead: geometry.padding,
            len,
            geometry,
            default_value,
            tail,
            index: 0,
            done: false,
        }
    }

    /// Resolved geometry of this pass.
    pub fn geometry(&self) -> WindowGeometry {
        self.geometry
    }

    /// Length of the padded sequence, remainder fill included.
    ///
    /// Saturates at `usize::MAX`; positions past it are never windowed.
    pub fn padded_len(&self) -> usize {
        self.len
    }

    /// Positions `start..end` of the padded sequence.
    fn slice(&self, start: usize, end: usize) -> Vec<T> {
        let n = self.items.len();
        let leading = self.lead.clamp(start, end) - start;
        let from = (start.max(self.lead) - self.lead).min(n);
        let to = (end.max(self.lead) - self.lead).min(n);

        let mut window: Vec<T> = repeat_n(self.default_value.clone(), leading).collect();
        window.extend_from_slice(&self.items[from..to]);
        window.resize(end - start, self.default_value.clone());
        window
    }
}

impl<T: Clone> Iterator for Windowed<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let (k, len) = (self.geometry.kernel_size, self.len);
        let start = self.index;
        if let Some(end) = start.checked_add(k).filter(|&end| end <= len) {
            self.index = start.saturating_add(self.geometry.stride);
            return Some(self.slice(start, end));
        }

        self.done = true;
        if start >= len {
            return None;
        }
        match self.tail {
            TailPolicy::Drop => None,
            TailPolicy::Truncate => Some(self.slice(start, len)),
            TailPolicy::Pad => {
                let mut window = self.slice(start, len);
                window.resize(k, self.default_value.clone());
                Some(window)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = if self.done {
            0
        } else {
            count_from(
                self.index,
                self.len,
                self.geometry.kernel_size,
                self.geometry.stride,
                self.tail,
            )
        };
        (n, Some(n))
    }
}

impl<T: Clone> ExactSizeIterator for Windowed<T> {}

impl<T: Clone> FusedIterator for Windowed<T> {}

/// Slide a `spec.kernel_size` window over `sequence` in steps of `spec.stride`.
///
/// Validation happens here, before the first window is pulled.
///
/// ```
/// use convolved::{WindowSpec, windowed};
///
/// let windows: Vec<_> = windowed([1, 2, 3], WindowSpec::new(2, 42).padding(2usize))?.collect();
/// assert_eq!(
///     windows,
///     vec![vec![42, 42], vec![42, 1], vec![1, 2], vec![2, 3], vec![3, 42], vec![42, 42]]
/// );
/// # Ok::<(), convolved::ConvError>(())
/// ```
#[tracing::instrument(skip_all, fields(kernel_size = spec.kernel_size, stride = spec.stride))]
pub fn windowed<I>(sequence: I, spec: WindowSpec<I::Item>) -> ConvResult<Windowed<I::Item>>
where
    I: IntoIterator,
    I::Item: Clone,
{
    let it = Windowed::new(sequence, spec)?;
    tracing::debug!(
        padding = it.geometry.padding,
        padded_len = it.len,
        tail = ?it.tail,
        "windowing pass ready"
    );
    Ok(it)
}

/// Alias of [`windowed`].
pub fn windowed_1d<I>(sequence: I, spec: WindowSpec<I::Item>) -> ConvResult<Windowed<I::Item>>
where
    I: IntoIterator,
    I::Item: Clone,
{
    windowed(sequence, spec)
}

#[cfg(test)]
#[path = "../../tests/unit/window/iter.rs"]
mod tests;
