//! CLI command implementations.

pub(crate) mod query;
pub(crate) mod serve;

pub(crate) use query::QueryArgs;
pub(crate) use serve::ServeArgs;
