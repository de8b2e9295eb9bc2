//! Convolution-style sliding windows over sequences and row-major matrices.
//!
//! `convolved` partitions data into fixed-size windows ("kernels") that advance by a stride,
//! with configurable boundary padding. It never computes on window contents; windows are
//! copies of input elements or of the fill value.
//!
//! # Passes
//!
//! 1. **1-D** ([`windowed`]): materialize the sequence, pad both ends, fill the right edge so the
//!    last full window ends on a stride boundary, then slice windows lazily. Padding and fill
//!    positions are computed, never allocated.
//! 2. **2-D** ([`windowed_2d`]): window the rows into row-groups, window every row of a group
//!    along the columns, and zip the per-row column windows into rectangular windows.
//! 3. **N-D** ([`windowed_nd`]): not implemented; always returns an error.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Eager validation**: every entry point validates its arguments before returning the
//!   iterator, so errors never surface mid-iteration.
//! - **Pure passes**: inputs are consumed by value and never mutated in place; no state is
//!   shared between calls.
//!
//! ```
//! use convolved::{Padding, WindowSpec, windowed};
//!
//! let spec = WindowSpec::new(3, 0).padding(Padding::Same);
//! let windows: Vec<_> = windowed([1, 2, 3, 4], spec)?.collect();
//! assert_eq!(windows, vec![vec![0, 1, 2], vec![1, 2, 3], vec![2, 3, 4], vec![3, 4, 0]]);
//! # Ok::<(), convolved::ConvError>(())
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod axis;
mod config;
mod foundation;
mod rect;
mod window;

pub use axis::broadcast::{AxisPair, AxisValue, dimensionize};
pub use config::json::{WindowConfig, windowed_2d_value, windowed_value};
pub use foundation::error::{ConvError, ConvResult};
pub use rect::compose::{RectSpec, RectWindow, Windowed2d, windowed_2d};
pub use rect::nd::windowed_nd;
pub use rect::parallel::{ColumnThreading, windowed_2d_par};
pub use window::iter::{Windowed, windowed, windowed_1d};
pub use window::padding::Padding;
pub use window::spec::{TailPolicy, WindowGeometry, WindowSpec};
