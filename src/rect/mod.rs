//! 2-D composition of two 1-D passes, and the n-d extension point.

pub(crate) mod compose;
pub(crate) mod nd;
pub(crate) mod parallel;
