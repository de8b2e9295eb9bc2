//! Serializable configuration and entry points over dynamic JSON data.

pub(crate) mod json;
