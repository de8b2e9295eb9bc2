//! The 1-D windowing engine.

pub(crate) mod iter;
pub(crate) mod padding;
pub(crate) mod spec;
