use anyhow::Context;
use rayon::prelude::*;

use crate::{
    foundation::error::{ConvError, ConvResult},
    rect::compose::{RectSpec, RectWindow, Windowed2d, windowed_2d},
};

/// How the column passes of a 2-D windowing run are scheduled.
#[derive(Clone, Debug, Default)]
pub struct ColumnThreading {
    /// Compose row-groups on a dedicated rayon pool.
    pub parallel: bool,
    /// Worker threads for the pool. `None` uses rayon defaults.
    pub threads: Option<usize>,
}

/// Eager 2-D windowing with optional row-group parallelism.
///
/// Returns the same windows, in the same order, as collecting [`windowed_2d`].
#[tracing::instrument(skip(matrix, spec))]
pub fn windowed_2d_par<M, R, T>(
    matrix: M,
    spec: RectSpec<T>,
    threading: &ColumnThreading,
) -> ConvResult<Vec<RectWindow<T>>>
where
    M: IntoIterator<Item = R>,
    R: IntoIterator<Item = T>,
    T: Clone + Send + Sync,
{
    if !threading.parallel {
        return Ok(windowed_2d(matrix, spec)?.collect());
    }

    let pool = build_thread_pool(threading.threads)?;
    let (rows, columns) = Windowed2d::new(matrix, spec)?.into_row_groups();
    let groups: Vec<Vec<Vec<T>>> = rows.collect();
    tracing::debug!(groups = groups.len(), "composing row-groups in parallel");

    let composed: Vec<Vec<RectWindow<T>>> = pool.install(|| {
        groups
            .into_par_iter()
            .map(|group| columns.compose(group))
            .collect()
    });
    Ok(composed.into_iter().flatten().collect())
}

fn build_thread_pool(threads: Option<usize>) -> ConvResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(ConvError::validation(
            "column threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    let pool = builder
        .build()
        .context("failed to build rayon thread pool")?;
    Ok(pool)
}

#[cfg(test)]
#[path = "../../tests/unit/rect/parallel.rs"]
mod tests;
