//! CLI error types.

use quill_config::ConfigError;
use quill_markup::MarkupError;
use quill_sql::SqlError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Sql(#[from] SqlError),

    #[error("{0}")]
    Markup(#[from] MarkupError),

    #[error("{0}")]
    Server(String),
}
