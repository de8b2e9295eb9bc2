use std::iter::{FusedIterator, repeat_n};

use crate::{
    axis::broadcast::{AxisPair, AxisValue},
    foundation::error::{ConvError, ConvResult},
    window::{
        iter::Windowed,
        padding::Padding,
        spec::{TailPolicy, WindowGeometry},
    },
};

/// A rectangular window: `kernel_size_row` rows of `kernel_size_col` elements, row-major.
pub type RectWindow<T> = Vec<Vec<T>>;

/// Window configuration for a 2-D pass; each numeric field is a scalar or a `(row, col)` pair.
#[derive(Clone, Debug, PartialEq)]
pub struct RectSpec<T> {
    /// Window extent per axis.
    pub kernel_size: AxisValue<usize>,
    /// Step per axis.
    pub stride: AxisValue<usize>,
    /// Boundary padding per axis.
    pub padding: AxisValue<Padding>,
    /// Fill value for padded cells. Padding rows are this value repeated to the matrix width.
    pub default_value: T,
    /// Trailing-remainder handling, applied on both axes.
    pub tail: TailPolicy,
}

impl<T> RectSpec<T> {
    /// Square kernel of `kernel_size`, stride 1, no padding, trailing remainder dropped.
    pub fn new(kernel_size: usize, default_value: T) -> Self {
        Self {
            kernel_size: AxisValue::Scalar(kernel_size),
            stride: AxisValue::Scalar(1),
            padding: AxisValue::Scalar(Padding::default()),
            default_value,
            tail: TailPolicy::Drop,
        }
    }

    /// Set a separate kernel extent per axis.
    pub fn kernel_per_axis(mut self, rows: usize, cols: usize) -> Self {
        self.kernel_size = AxisValue::PerAxis(rows, cols);
        self
    }

    /// Set the stride on both axes.
    pub fn stride(mut self, stride: usize) -> Self {
        self.stride = AxisValue::Scalar(stride);
        self
    }

    /// Set a separate stride per axis.
    pub fn stride_per_axis(mut self, rows: usize, cols: usize) -> Self {
        self.stride = AxisValue::PerAxis(rows, cols);
        self
    }

    /// Set the padding on both axes.
    pub fn padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = AxisValue::Scalar(padding.into());
        self
    }

    /// Set a separate padding per axis.
    pub fn padding_per_axis(mut self, rows: Padding, cols: Padding) -> Self {
        self.padding = AxisValue::PerAxis(rows, cols);
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

    /// Broadcast every field to `(row, col)` and validate both axes.
    pub fn geometry(&self) -> ConvResult<AxisPair<WindowGeometry>> {
        let k = self.kernel_size.pair();
        let s = self.stride.pair();
        let p = self.padding.pair();
        Ok(AxisPair {
            row: WindowGeometry::new(k.row, s.row, p.row)?,
            col: WindowGeometry::new(k.col, s.col, p.col)?,
        })
    }
}

impl<T: Default> Default for RectSpec<T> {
    fn default() -> Self {
        Self::new(1, T::default())
    }
}

/// Inner (column-axis) pass settings shared by every row of every row-group.
#[derive(Clone, Debug)]
pub(crate) struct ColumnPass<T> {
    pub(crate) geometry: WindowGeometry,
    pub(crate) default_value: T,
    pub(crate) tail: TailPolicy,
}

impl<T: Clone> ColumnPass<T> {
    fn cursors(&self, group: Vec<Vec<T>>) -> Vec<Windowed<T>> {
        group
            .into_iter()
            .map(|row| {
                Windowed::with_geometry(row, self.geometry, self.default_value.clone(), self.tail)
            })
            .collect()
    }

    /// Column windows of every row in `group`, transposed into rectangular windows.
    pub(crate) fn compose(&self, group: Vec<Vec<T>>) -> Vec<RectWindow<T>> {
        let mut cursors = self.cursors(group);
        let n = cursors.first().map_or(0, ExactSizeIterator::len);
        (0..n).map_while(|_| transpose_step(&mut cursors)).collect()
    }
}

/// Next column window of every row, stacked. `None` once any row cursor is exhausted.
///
/// Rows of a group share one width, so their cursors run out together.
fn transpose_step<T: Clone>(cursors: &mut [Windowed<T>]) -> Option<RectWindow<T>> {
    cursors.iter_mut().map(Iterator::next).collect()
}

/// Lazy cursor over the rectangular windows of a row-major matrix.
#[derive(Clone, Debug)]
pub struct Windowed2d<T> {
    rows: Windowed<Vec<T>>,
    columns: ColumnPass<T>,
    width: usize,
    current: Vec<Windowed<T>>,
    remaining: usize,
}

impl<T: Clone> Windowed2d<T> {
    /// Materialize `matrix`, reject ragged rows and prepare the row-axis pass.
    pub fn new<M, R>(matrix: M, spec: RectSpec<T>) -> ConvResult<Self>
    where
        M: IntoIterator<Item = R>,
        R: IntoIterator<Item = T>,
    {
        let geometry = spec.geometry()?;
        let (rows, width) = materialize(matrix)?;
        let default_row: Vec<T> = repeat_n(spec.default_value.clone(), width).collect();

        Ok(Self {
            rows: Windowed::with_geometry(rows, geometry.row, default_row, spec.tail),
            columns: ColumnPass {
                geometry: geometry.col,
                default_value: spec.default_value,
                tail: spec.tail,
            },
            width,
            current: Vec::new(),
            remaining: 0,
        })
    }

    /// Resolved `(row, col)` geometry.
    pub fn geometry(&self) -> AxisPair<WindowGeometry> {
        AxisPair {
            row: self.rows.geometry(),
            col: self.columns.geometry,
        }
    }

    /// Column count of the input matrix.
    pub fn width(&self) -> usize {
        self.width
    }

    pub(crate) fn into_row_groups(self) -> (Windowed<Vec<T>>, ColumnPass<T>) {
        (self.rows, self.columns)
    }
}

impl<T: Clone> Iterator for Windowed2d<T> {
    type Item = RectWindow<T>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.remaining == 0 {
            let group = self.rows.next()?;
            self.current = self.columns.cursors(group);
            self.remaining = self.current.first().map_or(0, ExactSizeIterator::len);
        }
        self.remaining -= 1;
        let window = transpose_step(&mut self.current);
        debug_assert!(window.is_some(), "row cursors of one group ran out unevenly");
        window
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let per_group = self
            .columns
            .geometry
            .window_count(self.width, self.columns.tail);
        let n = self
            .rows
            .len()
            .saturating_mul(per_group)
            .saturating_add(self.remaining);
        (n, Some(n))
    }
}

impl<T: Clone> ExactSizeIterator for Windowed2d<T> {}

impl<T: Clone> FusedIterator for Windowed2d<T> {}

pub(crate) fn materialize<M, R, T>(matrix: M) -> ConvResult<(Vec<Vec<T>>, usize)>
where
    M: IntoIterator<Item = R>,
    R: IntoIterator<Item = T>,
{
    let rows: Vec<Vec<T>> = matrix
        .into_iter()
        .map(|row| row.into_iter().collect())
        .collect();
    let width = rows.first().map_or(0, Vec::len);
    if let Some((row, got)) = rows
        .iter()
        .map(Vec::len)
        .enumerate()
        .find(|&(_, len)| len != width)
    {
        tracing::debug!(row, got, expected = width, "rejecting ragged matrix");
        return Err(ConvError::RaggedMatrix {
            row,
            expected: width,
            got,
        });
    }
    Ok((rows, width))
}

/// Slide a rectangular window over a row-major matrix.
///
/// The row axis is windowed first; every row of each row-group is then windowed along the
/// column axis, and the per-row column windows are zipped into rectangular windows.
///
/// ```
/// use convolved::{RectSpec, windowed_2d};
///
/// let m = vec![vec![1, 2], vec![3, 4], vec![5, 6]];
/// let out: Vec<_> = windowed_2d(m, RectSpec::new(2, 0))?.collect();
/// assert_eq!(out, vec![vec![vec![1, 2], vec![3, 4]], vec![vec![3, 4], vec![5, 6]]]);
/// # Ok::<(), convolved::ConvError>(())
/// ```
#[tracing::instrument(skip_all)]
pub fn windowed_2d<M, R, T>(matrix: M, spec: RectSpec<T>) -> ConvResult<Windowed2d<T>>
where
    M: IntoIterator<Item = R>,
    R: IntoIterator<Item = T>,
    T: Clone,
{
    let it = Windowed2d::new(matrix, spec)?;
    let g = it.geometry();
    tracing::debug!(
        rows = ?g.row,
        cols = ?g.col,
        width = it.width,
        windows = it.len(),
        "2-d windowing pass ready"
    );
    Ok(it)
}

#[cfg(test)]
#[path = "../../tests/unit/rect/compose.rs"]
mod tests;
