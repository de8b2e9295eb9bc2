//! Scalar-or-per-axis configuration values.

pub(crate) mod broadcast;
