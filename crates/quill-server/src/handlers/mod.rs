//! HTTP request handlers.

pub(crate) mod parameters;
